use crate::error::CalcError;
use crate::units::UnitValue;
use logos::{Logos, Span};
use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Default)]
pub enum LexingError {
    MalformedNumber(String),
    #[default]
    InvalidToken,
}

impl From<CalcError> for LexingError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::MalformedNumber(text) => LexingError::MalformedNumber(text),
            _ => LexingError::InvalidToken,
        }
    }
}

// logos cannot look ahead, so the number rule swallows any alphanumeric tail
// and the suffix is checked here.
fn callback_number(lex: &mut logos::Lexer<Token>) -> Result<UnitValue, LexingError> {
    lex.slice().parse::<UnitValue>().map_err(LexingError::from)
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexingError)]
#[logos(skip r"\s+")]
pub enum Token {
    #[regex(r"(\d+(\.\d*)?|\.\d+)([a-zA-Z][a-zA-Z0-9]*|%[a-zA-Z0-9]*)?", callback_number)]
    Number(UnitValue),
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Name(String),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("^")]
    Power,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    Eof,
}

impl Token {
    /// True for both plain and unit-bearing numeric literals.
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Multiply | Token::Divide | Token::Power
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) if value.is_unitless() => write!(f, "Number({})", value),
            Token::Number(value) => write!(f, "NumberWithUnit({})", value),
            Token::Name(name) => write!(f, "Name({})", name),
            Token::Plus => write!(f, "Plus"),
            Token::Minus => write!(f, "Minus"),
            Token::Multiply => write!(f, "Multiply"),
            Token::Divide => write!(f, "Divide"),
            Token::Power => write!(f, "Power"),
            Token::LParen => write!(f, "LParen"),
            Token::RParen => write!(f, "RParen"),
            Token::Eof => write!(f, "Eof"),
        }
    }
}

/// 1-based line and column of a character in the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn of(source: &str, offset: usize) -> Position {
        Position::START.advance(&source[..offset])
    }

    /// The position reached after reading `text` from here.
    pub fn advance(self, text: &str) -> Position {
        text.chars().fold(self, |position, c| match c {
            '\n' => Position {
                line: position.line + 1,
                column: 1,
            },
            _ => Position {
                column: position.column + 1,
                ..position
            },
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with the source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    pub span: Span,
    pub position: Position,
}

impl Lexeme {
    pub fn eof(source: &str) -> Lexeme {
        Lexeme {
            token: Token::Eof,
            text: String::new(),
            span: source.len()..source.len(),
            position: Position::of(source, source.len()),
        }
    }

    /// The literal text, or `<<EOF>>` for the end sentinel.
    pub fn describe(&self) -> &str {
        match self.token {
            Token::Eof => "<<EOF>>",
            _ => &self.text,
        }
    }
}

pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, LexingError>, Span)> {
    Token::lexer(input).spanned()
}

/// Splits `input` into lexemes, stopping at the first character that cannot
/// start a token.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, CalcError> {
    let mut lexemes = Vec::new();
    let mut position = Position::START;
    let mut offset = 0;
    for (token, span) in lex(input) {
        let text = &input[span.clone()];
        position = position.advance(&input[offset..span.start]);
        offset = span.start;
        match token {
            Ok(token) => lexemes.push(Lexeme {
                token,
                text: text.to_string(),
                position,
                span,
            }),
            Err(LexingError::MalformedNumber(text)) => {
                return Err(CalcError::MalformedNumber(text));
            }
            Err(LexingError::InvalidToken) => {
                let c = text.chars().next().unwrap_or_default();
                return Err(CalcError::UnexpectedCharacter(c));
            }
        }
    }
    tracing::trace!(count = lexemes.len(), "tokenized expression");
    Ok(lexemes)
}
