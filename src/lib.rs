//! # abacus
//!
//! A four-function calculator. Expressions are flat strings of numbers and
//! `+ - * /`; multiplication and division bind tighter than addition and
//! subtraction, and operators of equal precedence apply left to right.
//!
//! The core lives in [`calculator`]: [`calculator::evaluate`] takes the text
//! on the display and returns either a number or the error message to show.
//! Everything else is front-end: the [`keypad`] display state, the
//! [`repl`] line interface, result items, and configuration.

pub mod calculator;
pub mod config;
pub mod items;
pub mod keypad;
pub mod repl;

use crate::calculator::{evaluate, normalize_input};
use crate::config::Config;
use crate::items::CalculatorItem;

/// Normalise typed `input`, evaluate it, and format the result.
///
/// # Examples
/// ```
/// use abacus::{calculate, config::Config};
///
/// let item = calculate("2 + 3 * 4", &Config::default());
/// assert_eq!(item.display_result, "14");
///
/// let item = calculate("5/0", &Config::default());
/// assert!(item.is_error);
/// ```
pub fn calculate(input: &str, config: &Config) -> CalculatorItem {
    let expression = normalize_input(input, &config.input);
    let result = evaluate(&expression);
    CalculatorItem::from_result(expression, result, &config.display)
}
