//! Error kinds produced while turning expression text into a result.

use thiserror::Error;

/// Why an expression could not be turned into a displayable result.
///
/// Every variant is shown to the user as the same error marker; the detail
/// only reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing left to evaluate after cleaning up the expression.
    #[error("invalid expression")]
    InvalidExpression,
    /// The evaluator rejected the expression.
    #[error("evaluation failed: {0}")]
    Evaluation(String),
    /// The evaluator produced NaN or an infinity.
    #[error("result is not a finite number")]
    NotANumber,
}
