//! Expression sanitization.
//!
//! Converts the text shown on the keypad display into something the
//! evaluator accepts: display glyphs become ASCII operators and a dangling
//! operator at the end is dropped.

use super::CalcError;

/// Display glyphs and the ASCII token each one stands for.
const GLYPHS: &[(char, char)] = &[
    ('\u{00D7}', '*'), // ×
    ('\u{00F7}', '/'), // ÷
    ('\u{2212}', '-'), // − unicode minus
    ('\u{2013}', '-'), // – en dash
];

/// Check whether a character counts as an operator on the display.
///
/// The decimal point is included so that an operator typed right after a
/// `.` replaces it instead of producing `1.+`.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '\u{2212}' | '\u{00D7}' | '\u{00F7}' | '*' | '/' | '^' | '.'
    )
}

/// Characters stripped from the end of a normalized expression.
fn is_trailing_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '.')
}

/// Map display glyphs to their ASCII operators.
pub fn normalize_glyphs(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            GLYPHS
                .iter()
                .find(|(glyph, _)| *glyph == c)
                .map_or(c, |(_, ascii)| *ascii)
        })
        .collect()
}

/// Prepare display text for evaluation.
///
/// Fails with [`CalcError::InvalidExpression`] when the input is blank or
/// when removing trailing operators leaves nothing behind.
pub fn sanitize(raw: &str) -> Result<String, CalcError> {
    if raw.trim().is_empty() {
        return Err(CalcError::InvalidExpression);
    }

    let normalized = normalize_glyphs(raw);
    let cleaned = normalized.trim_end_matches(is_trailing_operator);

    if cleaned.trim().is_empty() {
        return Err(CalcError::InvalidExpression);
    }

    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        assert_eq!(sanitize(""), Err(CalcError::InvalidExpression));
        assert_eq!(sanitize("   "), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_only_operators_rejected() {
        assert_eq!(sanitize("-"), Err(CalcError::InvalidExpression));
        assert_eq!(sanitize("+-*/^."), Err(CalcError::InvalidExpression));
        assert_eq!(sanitize("\u{2212}"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_trailing_operators_stripped() {
        assert_eq!(sanitize("2+3+").unwrap(), "2+3");
        assert_eq!(sanitize("5*").unwrap(), "5");
        assert_eq!(sanitize("12*").unwrap(), "12");
        assert_eq!(sanitize("7+-*/^.").unwrap(), "7");
        assert_eq!(sanitize("1.").unwrap(), "1");
    }

    #[test]
    fn test_closing_paren_kept() {
        assert_eq!(sanitize("(4+1").unwrap(), "(4+1");
        assert_eq!(sanitize("(4+1)").unwrap(), "(4+1)");
        assert_eq!(sanitize("(4+1)+").unwrap(), "(4+1)");
        // An opening paren is not an operator either.
        assert_eq!(sanitize("2*(").unwrap(), "2*(");
    }

    #[test]
    fn test_glyphs_normalized() {
        assert_eq!(sanitize("6\u{00D7}7").unwrap(), "6*7");
        assert_eq!(sanitize("8\u{00F7}2").unwrap(), "8/2");
        assert_eq!(sanitize("9\u{2212}1").unwrap(), "9-1");
        assert_eq!(sanitize("9\u{2013}1").unwrap(), "9-1");
        assert_eq!(sanitize("3\u{00D7}\u{2212}").unwrap(), "3");
    }

    #[test]
    fn test_operator_chars() {
        for c in ['+', '-', '\u{2212}', '\u{00D7}', '\u{00F7}', '*', '/', '^', '.'] {
            assert!(is_operator_char(c), "{c:?}");
        }
        for c in ['0', '9', '(', ')', ' '] {
            assert!(!is_operator_char(c), "{c:?}");
        }
    }
}
