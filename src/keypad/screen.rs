//! The two display regions of the keypad.

use std::fmt;

/// Expression and result text as they should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen<'a> {
    expression: &'a str,
    result: &'a str,
}

impl<'a> Screen<'a> {
    pub fn new(expression: &'a str, result: &'a str) -> Self {
        Self { expression, result }
    }

    pub fn result(&self) -> &'a str {
        self.result
    }
}

/// Renders the expression on one line and the result below it with a
/// `= ` prefix. An empty result renders as a bare `=`.
impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", self.expression)?;
        if self.result.is_empty() {
            write!(f, "=")
        } else {
            write!(f, "= {}", self.result)
        }
    }
}
