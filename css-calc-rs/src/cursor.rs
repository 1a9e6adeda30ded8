use crate::error::{CalcError, Result};
use crate::lexer::{Lexeme, Token};

/// Forward-only reader over a token sequence with one token of lookahead.
///
/// Reading past the last token yields an end-of-input sentinel instead of
/// failing.
pub struct TokenCursor<'a> {
    tokens: &'a [Lexeme],
    position: usize,
    eof: Lexeme,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &str, tokens: &'a [Lexeme]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
            eof: Lexeme::eof(source),
        }
    }

    pub fn peek(&self) -> &Lexeme {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    pub fn next(&mut self) -> &Lexeme {
        let index = self.position;
        self.position += 1;
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    /// Consumes the next token and fails unless it is `expected`.
    pub fn expect(&mut self, expected: &Token) -> Result<()> {
        let lexeme = self.next();
        if &lexeme.token != expected {
            return Err(CalcError::UnexpectedToken(lexeme.describe().to_string()));
        }
        Ok(())
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
