use crate::scope::Resolved;
use crate::units::UnitValue;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        };
        write!(f, "{}", symbol)
    }
}

/// An identifier together with what it resolved to while parsing.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub resolved: Resolved,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(UnitValue),
    Identifier(Identifier),
    Binary(BinaryOperator, Box<Expr>, Box<Expr>),
    Call(Identifier, Box<Expr>),
    Negate(Box<Expr>),
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Identifier(identifier) => write!(f, "{}", identifier.name),
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::Call(target, argument) => write!(f, "{}({})", target.name, argument),
            Expr::Negate(operand) => write!(f, "-{}", operand),
        }
    }
}
