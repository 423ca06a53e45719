//! Error types for the calculator pipeline.
//!
//! Tokenizer failures are [`ParseError`], reducer failures are [`EvalError`].
//! Both fold into [`CalcError`] at the evaluation boundary, where every
//! failure becomes a display string.

use thiserror::Error;

use super::token::Operator;

/// Failures while turning text into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A character outside `0-9 . + - * /`.
    #[error("Invalid character in expression: {0}")]
    InvalidCharacter(char),

    /// `*` or `/` before any number.
    #[error("Expression starts with an operator without a preceding number")]
    LeadingOperator,

    /// Two operators in a row where the second one is not a minus sign.
    #[error("Consecutive operators not forming a negative number")]
    ConsecutiveOperators,

    /// The accumulated literal is not a number (`"1..2"`, a bare `"-"`).
    #[error("could not convert string to float: '{0}'")]
    NumberConversion(String),
}

/// Failures while reducing a token sequence to a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Empty components list for calculation")]
    EmptyExpression,

    /// An operator missing a numeric operand on either side.
    #[error("Invalid {} format", .0.verb())]
    MalformedOperator(Operator),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Expression could not be reduced to a single result")]
    IrreducibleExpression,
}

/// Any failure the evaluation façade can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Empty Expression")]
    EmptyInput,

    #[error("Invalid Expression")]
    InvalidExpression,

    /// Catch-all for failures the pipeline did not classify.
    #[error("Calculation Failed")]
    CalculationFailed,
}

impl CalcError {
    /// The text shown on the calculator display for this failure.
    pub fn display_message(&self) -> String {
        format!("Error: {}", self)
    }
}
