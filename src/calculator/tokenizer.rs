//! Turns a flat digit/operator string into a token sequence.
//!
//! Signs are folded into the number that follows them: a `+` or `-` before
//! the first number, or a `-` right after another operator, starts a signed
//! literal instead of producing an operator token.

use super::error::ParseError;
use super::token::{Operator, Token};

/// Tokenize `text`. Empty input gives an empty sequence.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            continue;
        }

        let Some(op) = Operator::from_char(c) else {
            return Err(ParseError::InvalidCharacter(c));
        };

        if !literal.is_empty() {
            tokens.push(close_literal(&mut literal)?);
        } else if tokens.is_empty() {
            if !op.is_sign() {
                return Err(ParseError::LeadingOperator);
            }
            literal.push(c);
            continue;
        } else if tokens.last().is_some_and(Token::is_operator) {
            if op != Operator::Sub {
                return Err(ParseError::ConsecutiveOperators);
            }
            literal.push(c);
            continue;
        }

        tokens.push(Token::Operator(op));
    }

    if !literal.is_empty() {
        tokens.push(close_literal(&mut literal)?);
    }

    Ok(tokens)
}

/// Convert the accumulated literal to a number and reset the accumulator.
fn close_literal(literal: &mut String) -> Result<Token, ParseError> {
    let value = literal
        .parse::<f64>()
        .map_err(|_| ParseError::NumberConversion(literal.clone()))?;
    literal.clear();
    Ok(Token::Number(value))
}
