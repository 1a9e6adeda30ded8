use crate::ast::{BinaryOperator, Expr, Identifier};
use crate::cursor::TokenCursor;
use crate::error::{CalcError, Result};
use crate::lexer::{Lexeme, Token, tokenize};
use crate::scope::{MathScope, Resolved, Scope};
use crate::validate::validate;

const MAX_DEPTH: usize = 256;

/// Height of a node whose tallest child has `height`, capped at `MAX_DEPTH`
/// so that evaluating, printing and dropping the tree stay shallow.
fn grow(height: usize) -> Result<usize> {
    if height >= MAX_DEPTH {
        return Err(CalcError::NestingTooDeep);
    }
    Ok(height + 1)
}

/// How tightly a token binds to the expression on its left.
fn binding_power(token: &Token) -> u8 {
    match token {
        Token::Plus | Token::Minus => 20,
        Token::Multiply | Token::Divide => 30,
        Token::Power => 40,
        Token::LParen => 50,
        _ => 0,
    }
}

/// Pratt parser pulling tokens through a [`TokenCursor`].
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    scope: &'a dyn Scope,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &str, tokens: &'a [Lexeme], scope: &'a dyn Scope) -> Self {
        Parser {
            cursor: TokenCursor::new(source, tokens),
            scope,
            depth: 0,
        }
    }

    /// Parses the whole token sequence as one expression.
    pub fn parse(mut self) -> Result<Expr> {
        let (expr, _) = self.parse_expression(0)?;
        if !self.cursor.at_end() {
            return Err(CalcError::UnexpectedToken(
                self.cursor.peek().describe().to_string(),
            ));
        }
        Ok(expr)
    }

    /// Returns the parsed expression together with the height of its tree.
    fn parse_expression(&mut self, min_bp: u8) -> Result<(Expr, usize)> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::NestingTooDeep);
        }
        let lexeme = self.cursor.next().clone();
        let (mut lhs, mut height) = self.nud(&lexeme)?;
        while binding_power(&self.cursor.peek().token) > min_bp {
            let lexeme = self.cursor.next().clone();
            (lhs, height) = self.led(lhs, height, &lexeme)?;
        }
        self.depth -= 1;
        Ok((lhs, height))
    }

    fn nud(&mut self, lexeme: &Lexeme) -> Result<(Expr, usize)> {
        match &lexeme.token {
            Token::Number(value) => Ok((Expr::Literal(*value), 1)),
            Token::Name(name) => Ok((Expr::Identifier(self.resolve(name, lexeme)?), 1)),
            Token::Plus => self.parse_expression(binding_power(&Token::Plus)),
            Token::Minus => {
                let (operand, height) = self.parse_expression(binding_power(&Token::Minus))?;
                Ok((Expr::Negate(Box::new(operand)), grow(height)?))
            }
            Token::LParen => {
                let inner = self.parse_expression(0)?;
                self.cursor.expect(&Token::RParen)?;
                Ok(inner)
            }
            _ => Err(CalcError::UnexpectedToken(lexeme.describe().to_string())),
        }
    }

    fn led(&mut self, lhs: Expr, lhs_height: usize, lexeme: &Lexeme) -> Result<(Expr, usize)> {
        let bp = binding_power(&lexeme.token);
        let op = match lexeme.token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Multiply => BinaryOperator::Multiply,
            Token::Divide => BinaryOperator::Divide,
            Token::Power => BinaryOperator::Power,
            Token::LParen => return self.call(lhs),
            _ => return Err(CalcError::UnexpectedToken(lexeme.describe().to_string())),
        };
        // right associative
        let rhs_bp = if op == BinaryOperator::Power { bp - 1 } else { bp };
        let (rhs, rhs_height) = self.parse_expression(rhs_bp)?;
        let height = grow(lhs_height.max(rhs_height))?;
        Ok((Expr::Binary(op, Box::new(lhs), Box::new(rhs)), height))
    }

    fn call(&mut self, lhs: Expr) -> Result<(Expr, usize)> {
        let target = match lhs {
            Expr::Identifier(identifier) => identifier,
            _ => return Err(CalcError::NotInvocable),
        };
        if let Resolved::Constant(_) = target.resolved {
            return Err(CalcError::NotAFunction(target.name));
        }
        let (argument, height) = self.parse_expression(0)?;
        self.cursor.expect(&Token::RParen)?;
        Ok((Expr::Call(target, Box::new(argument)), grow(height)?))
    }

    fn resolve(&self, name: &str, lexeme: &Lexeme) -> Result<Identifier> {
        match self.scope.resolve(name) {
            Some(resolved) => Ok(Identifier {
                name: name.to_string(),
                resolved,
            }),
            None => Err(CalcError::UnknownIdentifier {
                name: name.to_string(),
                position: Some(lexeme.position),
            }),
        }
    }
}

/// Tokenizes, validates and parses `input`, resolving identifiers in `scope`.
pub fn parse_with_scope(input: &str, scope: &dyn Scope) -> Result<Expr> {
    let tokens = tokenize(input)?;
    validate(&tokens)?;
    Parser::new(input, &tokens, scope).parse()
}

pub fn parse(input: &str) -> Result<Expr> {
    parse_with_scope(input, &MathScope)
}
