//! Calculator core: turns keypad display text into a displayable result.
//!
//! This module provides functionality to:
//! - Sanitize display text into evaluator input
//! - Evaluate expressions using fasteval
//! - Format results as plain decimals
//! - Copy results to the clipboard

mod clipboard;
mod error;
mod evaluation;
mod format;
mod sanitize;

pub use clipboard::copy_to_clipboard;
pub use error::CalcError;
pub use evaluation::{
    DEFAULT_ERROR_MARKER, EvaluationOutcome, Evaluator, FastevalEvaluator, evaluate_expression,
};
pub use format::{DEFAULT_PRECISION, MAX_PRECISION, format_result};
pub use sanitize::{is_operator_char, normalize_glyphs, sanitize};
