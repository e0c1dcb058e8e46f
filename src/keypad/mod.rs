//! Keypad front of the calculator: buttons, the input accumulator and the
//! display it drives.

mod accumulator;
mod key;
mod screen;

pub use accumulator::{Calculator, ExpressionState, Settings};
pub use key::{Key, Operator, parse_keys};
pub use screen::Screen;
