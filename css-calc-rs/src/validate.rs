//! Structural checks run over the whole token sequence before parsing.

use crate::error::{CalcError, Result};
use crate::lexer::{Lexeme, Token};

pub fn validate(tokens: &[Lexeme]) -> Result<()> {
    check_adjacent_numbers(tokens)?;
    check_consecutive_operators(tokens)?;
    check_parentheses(tokens)
}

pub fn check_adjacent_numbers(tokens: &[Lexeme]) -> Result<()> {
    let adjacent = tokens
        .windows(2)
        .any(|pair| pair[0].token.is_number() && pair[1].token.is_number());
    if adjacent {
        return Err(CalcError::AdjacentNumbers);
    }
    Ok(())
}

/// A `-` may follow any other operator as a negation; every other operator
/// pair is rejected.
pub fn check_consecutive_operators(tokens: &[Lexeme]) -> Result<()> {
    for pair in tokens.windows(2) {
        let (current, next) = (&pair[0].token, &pair[1].token);
        if !current.is_operator() || !next.is_operator() {
            continue;
        }
        match (current, next) {
            (Token::Minus, Token::Minus) => return Err(CalcError::DoubleMinus),
            (_, Token::Minus) => continue,
            _ => return Err(CalcError::ConsecutiveOperators),
        }
    }
    Ok(())
}

pub fn check_parentheses(tokens: &[Lexeme]) -> Result<()> {
    let mut open = 0usize;
    for lexeme in tokens {
        match lexeme.token {
            Token::LParen => open += 1,
            Token::RParen => {
                open = open.checked_sub(1).ok_or(CalcError::UnmatchedClosing)?;
            }
            _ => {}
        }
    }
    if open > 0 {
        return Err(CalcError::UnmatchedOpening);
    }
    Ok(())
}
