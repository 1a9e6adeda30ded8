//! Evaluation of CSS `calc()`-like arithmetic over unit-bearing numbers.
//!
//! ```
//! use css_calc_rs::{evaluate, CalcValue};
//!
//! assert_eq!(evaluate("10px + 5px"), Ok(CalcValue::Text("15px".to_string())));
//! assert_eq!(evaluate("2 ^ 3"), Ok(CalcValue::Number(8.0)));
//! ```

mod ast;
mod cursor;
mod error;
mod eval;
mod lexer;
mod parser;
mod scope;
mod units;
mod validate;

pub use crate::ast::{BinaryOperator, Expr, Identifier};
pub use crate::cursor::TokenCursor;
pub use crate::eval::evaluate_expr;
pub use crate::error::{CalcError, ErrorKind, Result, UnitLabel};
pub use crate::lexer::{Lexeme, Position, Token, tokenize};
pub use crate::parser::{Parser, parse, parse_with_scope};
pub use crate::scope::{MathScope, Resolved, Scope, UnaryFunction};
pub use crate::units::{Unit, UnitValue, format_number};
pub use crate::validate::validate;

use std::fmt::Display;

/// The rendered result of an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcValue {
    Number(f64),
    Text(String),
}

impl From<UnitValue> for CalcValue {
    fn from(value: UnitValue) -> Self {
        if !value.is_unitless() {
            CalcValue::Text(value.to_string())
        } else if value.from_unit_division {
            CalcValue::Text(format_number(value.magnitude))
        } else {
            CalcValue::Number(value.magnitude)
        }
    }
}

impl Display for CalcValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcValue::Number(value) => write!(f, "{}", format_number(*value)),
            CalcValue::Text(text) => write!(f, "{}", text),
        }
    }
}

pub fn evaluate_with_scope(expression: &str, scope: &dyn Scope) -> Result<CalcValue> {
    let result = parse_with_scope(expression, scope).and_then(|expr| evaluate_expr(&expr));
    match &result {
        Ok(value) => tracing::debug!(expression, %value, "evaluated expression"),
        Err(err) => tracing::debug!(expression, error = %err, "failed to evaluate expression"),
    }
    result.map(CalcValue::from)
}

/// Evaluates `expression` against the built-in math constants and functions.
pub fn evaluate(expression: &str) -> Result<CalcValue> {
    evaluate_with_scope(expression, &MathScope)
}
