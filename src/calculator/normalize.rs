//! Input clean-up for typed expressions.
//!
//! The evaluator itself rejects whitespace and non-ASCII operators. Text
//! typed at a terminal usually has both, so the front-end normalises it
//! first, as configured.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::InputConfig;

lazy_static! {
    /// Any run of whitespace.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// Unicode multiplication, division and minus signs.
    static ref UNICODE_OPERATORS: Regex = Regex::new(r"[×÷−]").unwrap();
}

/// Normalise `input` according to `config`.
pub fn normalize_input(input: &str, config: &InputConfig) -> String {
    let mut text = input.trim().to_string();

    if config.strip_whitespace {
        text = WHITESPACE.replace_all(&text, "").into_owned();
    }

    if config.unicode_operators {
        text = UNICODE_OPERATORS
            .replace_all(&text, |caps: &Captures| match &caps[0] {
                "×" => "*",
                "÷" => "/",
                _ => "-",
            })
            .into_owned();
    }

    text
}
