//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Tokenize a digit/operator string into numbers and operators
//! - Reduce the tokens with `*`/`/` before `+`/`-` precedence
//! - Evaluate text to a number or a displayable error
//! - Format results and copy them to the clipboard

mod clipboard;
mod error;
mod evaluation;
mod format;
mod normalize;
mod reducer;
mod token;
mod tokenizer;

pub use clipboard::copy_to_clipboard;
pub use error::{CalcError, EvalError, ParseError};
pub use evaluation::{DisplayResult, evaluate, try_evaluate};
pub use format::{format_clipboard, format_display};
pub use normalize::normalize_input;
pub use reducer::reduce;
pub use token::{Operator, Token};
pub use tokenizer::tokenize;
