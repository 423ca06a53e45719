//! Reduces a token sequence to a single value.
//!
//! Two passes over a working vector: the first collapses every `*` and `/`,
//! the second every `+` and `-`. Each collapse splices `left op right` into
//! one number and restarts the scan from the front, so indices never go
//! stale. Sequences are short, so the quadratic worst case does not matter.

use super::error::EvalError;
use super::token::{Operator, Token};

/// Reduce `tokens` honouring `*`/`/` before `+`/`-`, left to right.
pub fn reduce(mut tokens: Vec<Token>) -> Result<f64, EvalError> {
    match tokens.as_slice() {
        [] => return Err(EvalError::EmptyExpression),
        [Token::Number(value)] => return Ok(*value),
        _ => {}
    }

    collapse_tier(&mut tokens, Operator::is_multiplicative)?;
    collapse_tier(&mut tokens, |op| !op.is_multiplicative())?;

    match tokens.as_slice() {
        [Token::Number(value)] => Ok(*value),
        _ => Err(EvalError::IrreducibleExpression),
    }
}

/// Collapse every operator accepted by `in_tier`, always taking the leftmost.
fn collapse_tier(
    tokens: &mut Vec<Token>,
    in_tier: impl Fn(Operator) -> bool,
) -> Result<(), EvalError> {
    while let Some(index) = tokens
        .iter()
        .position(|token| token.as_operator().is_some_and(&in_tier))
    {
        let value = apply_at(tokens, index)?;
        tokens[index - 1] = Token::Number(value);
        tokens.drain(index..=index + 1);
    }
    Ok(())
}

/// Compute the operator at `index` against its neighbours.
fn apply_at(tokens: &[Token], index: usize) -> Result<f64, EvalError> {
    let Some(op) = tokens[index].as_operator() else {
        return Err(EvalError::IrreducibleExpression);
    };

    if index == 0 || index + 1 >= tokens.len() {
        return Err(EvalError::MalformedOperator(op));
    }

    let (Some(left), Some(right)) = (tokens[index - 1].as_number(), tokens[index + 1].as_number())
    else {
        return Err(EvalError::MalformedOperator(op));
    };

    if op == Operator::Div && right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    Ok(op.apply(left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::tokenize;

    fn reduce_str(text: &str) -> Result<f64, EvalError> {
        reduce(tokenize(text).unwrap())
    }

    #[test]
    fn test_reduce_single_number() {
        assert_eq!(reduce(vec![Token::Number(-3.5)]), Ok(-3.5));
    }

    #[test]
    fn test_reduce_empty() {
        assert_eq!(reduce(vec![]), Err(EvalError::EmptyExpression));
    }

    #[test]
    fn test_reduce_precedence() {
        assert_eq!(reduce_str("2+3*4"), Ok(14.0));
        assert_eq!(reduce_str("10-4/2"), Ok(8.0));
        assert_eq!(reduce_str("2*3+4/2"), Ok(8.0));
        assert_eq!(reduce_str("10+2-3*4/2+5"), Ok(11.0));
    }

    #[test]
    fn test_reduce_left_to_right_within_tier() {
        assert_eq!(reduce_str("10/2*5"), Ok(25.0));
        assert_eq!(reduce_str("10-2-3"), Ok(5.0));
        assert_eq!(reduce_str("8/4/2"), Ok(1.0));
    }

    #[test]
    fn test_reduce_division_by_zero() {
        assert_eq!(reduce_str("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(reduce_str("2+3*4/0"), Err(EvalError::DivisionByZero));
        assert_eq!(reduce_str("10-0/0"), Err(EvalError::DivisionByZero));
        assert_eq!(reduce_str("1/-0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_reduce_trailing_operator_is_malformed() {
        assert_eq!(
            reduce_str("5*"),
            Err(EvalError::MalformedOperator(Operator::Mul))
        );
        assert_eq!(
            reduce_str("5/"),
            Err(EvalError::MalformedOperator(Operator::Div))
        );
        assert_eq!(
            reduce_str("5+"),
            Err(EvalError::MalformedOperator(Operator::Add))
        );
        assert_eq!(
            reduce_str("5-"),
            Err(EvalError::MalformedOperator(Operator::Sub))
        );
    }

    #[test]
    fn test_reduce_operator_with_operator_neighbour() {
        let tokens = vec![
            Token::Number(1.0),
            Token::Operator(Operator::Mul),
            Token::Operator(Operator::Add),
            Token::Number(2.0),
        ];
        assert_eq!(
            reduce(tokens),
            Err(EvalError::MalformedOperator(Operator::Mul))
        );
    }

    #[test]
    fn test_reduce_adjacent_numbers_are_irreducible() {
        let tokens = vec![Token::Number(1.0), Token::Number(2.0)];
        assert_eq!(reduce(tokens), Err(EvalError::IrreducibleExpression));
    }

    #[test]
    fn test_reduce_lone_operator() {
        let tokens = vec![Token::Operator(Operator::Sub)];
        assert_eq!(
            reduce(tokens),
            Err(EvalError::MalformedOperator(Operator::Sub))
        );
    }
}
