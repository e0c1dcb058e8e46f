//! Expression evaluation.
//!
//! The arithmetic itself is done by fasteval behind the [`Evaluator`] trait;
//! this module sanitizes the display text, runs the evaluator and formats the
//! number for the result display.

use super::{CalcError, format_result, sanitize};
use std::collections::BTreeMap;

/// Text shown in place of a result when evaluation fails.
pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// Something that can compute the value of a normalized ASCII expression.
pub trait Evaluator {
    /// Evaluate `expression` (digits, `.`, `+ - * / ^` and parentheses).
    fn evaluate(&self, expression: &str) -> Result<f64, CalcError>;
}

/// Evaluator backed by fasteval with an empty namespace (no variables).
#[derive(Clone, Copy, Debug, Default)]
pub struct FastevalEvaluator;

impl Evaluator for FastevalEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        let expression = prepare(expression)?;
        let mut namespace = BTreeMap::<String, f64>::new();
        fasteval::ez_eval(&expression, &mut namespace)
            .map_err(|e| CalcError::Evaluation(format!("{e:?}")))
    }
}

/// Characters fasteval may see; anything else would reach its extended
/// language (functions, `%`, comparisons, `k`/`M` suffixes).
fn is_arithmetic_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// Drop whitespace, reject non-arithmetic characters and spell out the
/// multiplication implied by `2(3)`, `(2)(3)` and `(2)3`.
fn prepare(expression: &str) -> Result<String, CalcError> {
    let mut prepared = String::with_capacity(expression.len());
    let mut prev: Option<char> = None;

    for c in expression.chars().filter(|c| !c.is_whitespace()) {
        if !is_arithmetic_char(c) {
            return Err(CalcError::Evaluation(format!("unexpected character {c:?}")));
        }
        let implied = match (prev, c) {
            (Some(p), '(') => p.is_ascii_digit() || p == ')',
            (Some(')'), c) => c.is_ascii_digit() || c == '.',
            _ => false,
        };
        if implied {
            prepared.push('*');
        }
        prepared.push(c);
        prev = Some(c);
    }

    Ok(prepared)
}

/// Result of pressing "=" on an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum EvaluationOutcome {
    /// The expression produced a finite number.
    Success {
        /// The numeric value.
        value: f64,
        /// Formatted for display and clipboard.
        display_result: String,
    },
    /// The expression could not be evaluated.
    Error(CalcError),
}

impl EvaluationOutcome {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the text for the result display, using `error_marker` for failures.
    pub fn display<'a>(&'a self, error_marker: &'a str) -> &'a str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error(_) => error_marker,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success { display_result, .. } => Some(display_result),
            Self::Error(_) => None,
        }
    }
}

/// Sanitize, evaluate and format display text in one go.
pub fn evaluate_expression(
    evaluator: &impl Evaluator,
    raw: &str,
    precision: u32,
) -> EvaluationOutcome {
    match compute(evaluator, raw, precision) {
        Ok((value, display_result)) => EvaluationOutcome::Success {
            value,
            display_result,
        },
        Err(err) => {
            tracing::debug!(expression = raw, error = %err, "evaluation failed");
            EvaluationOutcome::Error(err)
        }
    }
}

fn compute(
    evaluator: &impl Evaluator,
    raw: &str,
    precision: u32,
) -> Result<(f64, String), CalcError> {
    let sanitized = sanitize(raw)?;
    let value = evaluator.evaluate(&sanitized)?;
    let display_result = format_result(value, precision).ok_or(CalcError::NotANumber)?;
    Ok((value, display_result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::DEFAULT_PRECISION;

    fn eval(raw: &str) -> EvaluationOutcome {
        evaluate_expression(&FastevalEvaluator, raw, DEFAULT_PRECISION)
    }

    #[test]
    fn test_basic_evaluation() {
        let result = eval("2+2");
        assert!(result.is_success());
        assert_eq!(result.display("Error"), "4");
        assert_eq!(result.clipboard(), Some("4"));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4").display("Error"), "14");
        assert_eq!(eval("(2+3)*4").display("Error"), "20");
        assert_eq!(eval("2^3*2").display("Error"), "16");
        assert_eq!(eval("10-4-3").display("Error"), "3");
        assert_eq!(eval("-5+2").display("Error"), "-3");
    }

    #[test]
    fn test_display_glyphs() {
        assert_eq!(eval("6\u{00D7}7").display("Error"), "42");
        assert_eq!(eval("9\u{00F7}2").display("Error"), "4.5");
        assert_eq!(eval("9\u{2212}10").display("Error"), "-1");
    }

    #[test]
    fn test_trailing_operator_ignored() {
        assert_eq!(eval("2+3+").display("Error"), "5");
        assert_eq!(eval("12\u{00D7}").display("Error"), "12");
    }

    #[test]
    fn test_decimal_result() {
        assert_eq!(eval("0.1+0.2").display("Error"), "0.3");
        assert_eq!(eval("1/3").display("Error"), "0.3333333333");
    }

    #[test]
    fn test_division_by_zero() {
        let result = eval("1/0");
        assert_eq!(result, EvaluationOutcome::Error(CalcError::NotANumber));
        assert_eq!(result.display("Error"), "Error");
        assert_eq!(result.clipboard(), None);
    }

    #[test]
    fn test_invalid_expression() {
        assert_eq!(eval(""), EvaluationOutcome::Error(CalcError::InvalidExpression));
        assert_eq!(eval("+"), EvaluationOutcome::Error(CalcError::InvalidExpression));
        assert!(matches!(
            eval("(4+1"),
            EvaluationOutcome::Error(CalcError::Evaluation(_))
        ));
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(eval("2(3+4)").display("Error"), "14");
        assert_eq!(eval("(2+3)(4)").display("Error"), "20");
        assert_eq!(eval("(2+3)2").display("Error"), "10");
        assert_eq!(eval("2 (3)").display("Error"), "6");
    }

    #[test]
    fn test_prepare() {
        assert_eq!(prepare("2(3)(4)5").unwrap(), "2*(3)*(4)*5");
        assert_eq!(prepare("-(2)").unwrap(), "-(2)");
        assert_eq!(prepare("(1).5").unwrap(), "(1)*.5");
        assert_eq!(prepare("2*(3)").unwrap(), "2*(3)");
        assert_eq!(prepare(" 1 + 2 ").unwrap(), "1+2");
    }

    #[test]
    fn test_non_arithmetic_rejected() {
        for input in ["2k", "5%3", "1<2", "sin(0)", "pi()", "2,3", "x+1"] {
            assert!(
                matches!(eval(input), EvaluationOutcome::Error(CalcError::Evaluation(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn test_unary_minus_binds_before_power() {
        // fasteval reads the sign as part of the base.
        assert_eq!(eval("-2^2").display("Error"), "4");
        assert_eq!(eval("0-2^2").display("Error"), "-4");
    }

    #[test]
    fn test_custom_evaluator() {
        struct Fixed(f64);
        impl Evaluator for Fixed {
            fn evaluate(&self, _expression: &str) -> Result<f64, CalcError> {
                Ok(self.0)
            }
        }

        let result = evaluate_expression(&Fixed(2.0 / 3.0), "1", 3);
        assert_eq!(result.display("Error"), "0.667");
        let result = evaluate_expression(&Fixed(f64::NAN), "1", 3);
        assert_eq!(result, EvaluationOutcome::Error(CalcError::NotANumber));
    }
}
