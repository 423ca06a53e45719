//! Calculator item representing a calculation result.

use serde::Serialize;

use crate::calculator::{DisplayResult, format_clipboard, format_display};
use crate::config::DisplayConfig;

/// A calculator item representing a calculation result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorItem {
    /// The expression as it was evaluated.
    pub expression: String,
    /// The numeric value, absent for errors.
    pub value: Option<f64>,
    /// The result formatted for display, or the error message.
    pub display_result: String,
    /// The result formatted for clipboard (raw number).
    /// None if the result is an error.
    pub clipboard_result: Option<String>,
    /// Whether this is an error result.
    pub is_error: bool,
}

impl CalculatorItem {
    /// Create a new calculator item from an evaluation result.
    pub fn from_result(
        expression: impl Into<String>,
        result: DisplayResult,
        config: &DisplayConfig,
    ) -> Self {
        let expression = expression.into();
        match result {
            DisplayResult::Value(value) => Self {
                expression,
                value: Some(value),
                display_result: format_display(value, config),
                clipboard_result: Some(format_clipboard(value, config)),
                is_error: false,
            },
            DisplayResult::Error(message) => Self {
                expression,
                value: None,
                display_result: message,
                clipboard_result: None,
                is_error: true,
            },
        }
    }

    /// Get the text to copy to clipboard.
    /// Returns the clipboard result for successful calculations,
    /// or the display result for errors (so user can still copy the error message).
    pub fn text_for_clipboard(&self) -> &str {
        self.clipboard_result
            .as_deref()
            .unwrap_or(&self.display_result)
    }
}
