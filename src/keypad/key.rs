//! Keypad buttons and how terminal input maps onto them.

/// An operator button on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Plus,
    /// `−`, or an ASCII `-` when it starts the expression.
    Minus,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl Operator {
    /// The glyph printed on the button and inserted into the expression.
    pub fn glyph(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '\u{2212}',
            Self::Multiply => '\u{00D7}',
            Self::Divide => '\u{00F7}',
            Self::OpenParen => '(',
            Self::CloseParen => ')',
        }
    }
}

/// A single button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit `0-9` or the decimal point.
    Digit(char),
    /// An operator or parenthesis button.
    Operator(Operator),
    /// Empty the expression and the result.
    Clear,
    /// Remove the last character of the expression.
    Delete,
    /// Evaluate the expression.
    Equals,
    /// Copy the current result to the clipboard.
    Copy,
}

impl Key {
    /// Map one typed character to the button it stands for.
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0'..='9' | '.' => Self::Digit(c),
            '+' => Self::Operator(Operator::Plus),
            '-' | '\u{2212}' | '\u{2013}' => Self::Operator(Operator::Minus),
            '*' | 'x' | '\u{00D7}' => Self::Operator(Operator::Multiply),
            '/' | '\u{00F7}' => Self::Operator(Operator::Divide),
            '(' => Self::Operator(Operator::OpenParen),
            ')' => Self::Operator(Operator::CloseParen),
            '=' => Self::Equals,
            'c' | 'C' => Self::Clear,
            '<' => Self::Delete,
            'y' => Self::Copy,
            _ => return None,
        };
        Some(key)
    }
}

/// Turn a line of typed characters into button presses.
///
/// Whitespace is skipped; characters that match no button are logged and
/// dropped.
pub fn parse_keys(line: &str) -> Vec<Key> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| {
            let key = Key::from_char(c);
            if key.is_none() {
                tracing::debug!(input = %c, "ignoring unknown key");
            }
            key
        })
        .collect()
}
