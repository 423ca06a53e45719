//! Expression evaluation.
//!
//! Runs the tokenizer and the reducer in sequence and turns every failure
//! into the text the calculator display should show.

use tracing::{debug, trace};

use super::error::CalcError;
use super::reducer::reduce;
use super::tokenizer::tokenize;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayResult {
    /// The expression reduced to a number. Formatting is up to the caller.
    Value(f64),
    /// The expression failed; the message is shown verbatim.
    Error(String),
}

impl DisplayResult {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Error(_) => None,
        }
    }

    /// The error text, `"Error: ..."`, if evaluation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl From<Result<f64, CalcError>> for DisplayResult {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Error(err.display_message()),
        }
    }
}

/// Evaluate `text` for display. Never fails; errors come back as strings.
pub fn evaluate(text: &str) -> DisplayResult {
    let result = try_evaluate(text);
    match &result {
        Ok(value) => debug!(expression = text, value, "evaluated expression"),
        Err(err) => debug!(expression = text, error = %err, "expression rejected"),
    }
    result.into()
}

/// Evaluate `text`, keeping the typed error.
pub fn try_evaluate(text: &str) -> Result<f64, CalcError> {
    if text.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(CalcError::InvalidExpression);
    }
    trace!(?tokens, "tokenized expression");

    Ok(reduce(tokens)?)
}
