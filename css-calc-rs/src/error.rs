use crate::lexer::Position;
use crate::units::Unit;
use std::fmt::{self, Display};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Broad classification of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Structural,
    UnknownIdentifier,
    Invocation,
    UnitMismatch,
    Grammar,
}

/// The unit of an operand as it appears in diagnostics, `unitless` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabel(pub Option<Unit>);

impl Display for UnitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(unit) => write!(f, "{}", unit),
            None => write!(f, "unitless"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid number format: \"{0}\"")]
    MalformedNumber(String),

    #[error("Unexpected character in input: {0}")]
    UnexpectedCharacter(char),

    #[error("Adjacent numbers are not allowed")]
    AdjacentNumbers,

    #[error("Double minus (--) is not allowed")]
    DoubleMinus,

    #[error("Consecutive operators are not allowed")]
    ConsecutiveOperators,

    #[error("Unmatched opening parenthesis")]
    UnmatchedOpening,

    #[error("Unmatched closing parenthesis")]
    UnmatchedClosing,

    #[error("Unknown expression: '{name}'{}. Only Math constants and functions are supported.", located(.position))]
    UnknownIdentifier {
        name: String,
        position: Option<Position>,
    },

    #[error("Cannot invoke expression as if it was a function")]
    NotInvocable,

    #[error("Cannot invoke non-function")]
    NotAFunction(String),

    #[error("Function '{0}' must be called with an argument")]
    FunctionNotCalled(String),

    #[error("Cannot {operation} values with different units: {left} and {right}")]
    UnitMismatch {
        operation: &'static str,
        left: UnitLabel,
        right: UnitLabel,
    },

    #[error("Cannot multiply two unit-bearing values: {left} and {right}")]
    MultiplyUnits { left: UnitLabel, right: UnitLabel },

    #[error("Cannot divide incompatible units: {left} and {right}")]
    DivideUnits { left: UnitLabel, right: UnitLabel },

    #[error("Power operations can only be performed on unitless values")]
    PowerUnits,

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Expression is nested too deeply")]
    NestingTooDeep,
}

fn located(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" at {}", position),
        None => String::new(),
    }
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MalformedNumber(_) | CalcError::UnexpectedCharacter(_) => ErrorKind::Lex,
            CalcError::AdjacentNumbers
            | CalcError::DoubleMinus
            | CalcError::ConsecutiveOperators
            | CalcError::UnmatchedOpening
            | CalcError::UnmatchedClosing => ErrorKind::Structural,
            CalcError::UnknownIdentifier { .. } => ErrorKind::UnknownIdentifier,
            CalcError::NotInvocable
            | CalcError::NotAFunction(_)
            | CalcError::FunctionNotCalled(_) => ErrorKind::Invocation,
            CalcError::UnitMismatch { .. }
            | CalcError::MultiplyUnits { .. }
            | CalcError::DivideUnits { .. }
            | CalcError::PowerUnits => ErrorKind::UnitMismatch,
            CalcError::UnexpectedToken(_) | CalcError::NestingTooDeep => ErrorKind::Grammar,
        }
    }
}
