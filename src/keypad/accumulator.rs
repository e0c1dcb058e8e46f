//! Input accumulator: the state behind the keypad display.

use super::{Key, Operator, Screen};
use crate::calculator::{
    DEFAULT_ERROR_MARKER, DEFAULT_PRECISION, EvaluationOutcome, Evaluator, FastevalEvaluator,
    evaluate_expression, is_operator_char,
};

/// The expression being typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionState {
    text: String,
    has_pending_answer: bool,
}

impl ExpressionState {
    /// The expression as shown on the display.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the last action was a successful evaluation with no edit since.
    pub fn has_pending_answer(&self) -> bool {
        self.has_pending_answer
    }
}

/// Display and rounding settings for a [`Calculator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Fractional digits kept in results.
    pub precision: u32,
    /// Text shown in the result display when evaluation fails.
    pub error_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
        }
    }
}

/// Keypad controller owning the expression and the last evaluation outcome.
///
/// None of the operations fail: evaluation problems end up as the error
/// marker on the result display.
pub struct Calculator<E = FastevalEvaluator> {
    state: ExpressionState,
    outcome: Option<EvaluationOutcome>,
    evaluator: E,
    settings: Settings,
}

impl Calculator<FastevalEvaluator> {
    /// Create a calculator that evaluates with fasteval.
    pub fn new(settings: Settings) -> Self {
        Self::with_evaluator(FastevalEvaluator, settings)
    }
}

impl<E: Evaluator> Calculator<E> {
    /// Create a calculator backed by a custom evaluator.
    pub fn with_evaluator(evaluator: E, settings: Settings) -> Self {
        Self {
            state: ExpressionState::default(),
            outcome: None,
            evaluator,
            settings,
        }
    }

    /// The expression being typed.
    pub fn state(&self) -> &ExpressionState {
        &self.state
    }

    /// Snapshot of both display regions.
    pub fn screen(&self) -> Screen<'_> {
        let result = self
            .outcome
            .as_ref()
            .map_or("", |outcome| outcome.display(&self.settings.error_marker));
        Screen::new(&self.state.text, result)
    }

    /// The displayed result, if it is a number rather than an error.
    pub fn copyable_result(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(EvaluationOutcome::clipboard)
    }

    /// Dispatch a button press.
    ///
    /// [`Key::Copy`] is left to the front end, which owns the clipboard.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(token) => self.append_digit_or_dot(token),
            Key::Operator(op) => self.apply_operator(op),
            Key::Clear => self.clear(),
            Key::Delete => self.delete_last(),
            Key::Equals => {
                self.evaluate();
            }
            Key::Copy => {}
        }
    }

    /// Append a digit or decimal point, starting over after an answer.
    pub fn append_digit_or_dot(&mut self, token: char) {
        if self.state.has_pending_answer {
            self.state.text.clear();
            self.outcome = None;
            self.state.has_pending_answer = false;
        }
        self.state.text.push(token);
    }

    /// Insert an operator, replacing a trailing one instead of stacking.
    pub fn apply_operator(&mut self, op: Operator) {
        let text = &mut self.state.text;

        if text.is_empty() {
            // Only a leading minus may start an expression.
            if op != Operator::Minus {
                tracing::debug!(?op, "ignoring operator on empty expression");
                return;
            }
            text.push('-');
        } else if text.ends_with(is_operator_char) {
            text.pop();
            text.push(op.glyph());
        } else {
            text.push(op.glyph());
        }

        self.state.has_pending_answer = false;
    }

    /// Empty both the expression and the result.
    pub fn clear(&mut self) {
        self.state.text.clear();
        self.outcome = None;
        self.state.has_pending_answer = false;
    }

    /// Remove the last character of the expression, if any.
    pub fn delete_last(&mut self) {
        self.state.text.pop();
        self.state.has_pending_answer = false;
    }

    /// Evaluate the expression and show the outcome.
    ///
    /// Returns `None` when the expression is blank, in which case the result
    /// display is cleared.
    pub fn evaluate(&mut self) -> Option<&EvaluationOutcome> {
        if self.state.text.trim().is_empty() {
            self.outcome = None;
            return None;
        }

        let outcome =
            evaluate_expression(&self.evaluator, &self.state.text, self.settings.precision);
        self.state.has_pending_answer = outcome.is_success();
        self.outcome = Some(outcome);
        self.outcome.as_ref()
    }
}
