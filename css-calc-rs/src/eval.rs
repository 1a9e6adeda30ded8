use crate::ast::{BinaryOperator, Expr, Identifier};
use crate::error::{CalcError, Result};
use crate::scope::Resolved;
use crate::units::UnitValue;

/// Evaluates `expr` bottom-up, enforcing unit compatibility at every node.
pub fn evaluate_expr(expr: &Expr) -> Result<UnitValue> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Identifier(identifier) => constant(identifier),
        Expr::Negate(operand) => Ok(evaluate_expr(operand)?.negate()),
        Expr::Binary(op, lhs, rhs) => {
            let lhs = evaluate_expr(lhs)?;
            let rhs = evaluate_expr(rhs)?;
            let result = match op {
                BinaryOperator::Add => lhs.add(&rhs),
                BinaryOperator::Subtract => lhs.subtract(&rhs),
                BinaryOperator::Multiply => lhs.multiply(&rhs),
                BinaryOperator::Divide => lhs.divide(&rhs),
                BinaryOperator::Power => lhs.pow(&rhs),
            };
            tracing::trace!(%op, %lhs, %rhs, ok = result.is_ok(), "binary operation");
            result
        }
        Expr::Call(target, argument) => {
            let argument = evaluate_expr(argument)?;
            match target.resolved {
                Resolved::UnaryFunction(function) => {
                    let magnitude = (function.apply)(argument.magnitude);
                    let unit = if function.keeps_unit { argument.unit } else { None };
                    Ok(UnitValue::new(magnitude, unit))
                }
                Resolved::Constant(_) => Err(CalcError::NotAFunction(target.name.clone())),
            }
        }
    }
}

fn constant(identifier: &Identifier) -> Result<UnitValue> {
    match identifier.resolved {
        Resolved::Constant(value) => Ok(UnitValue::unitless(value)),
        Resolved::UnaryFunction(_) => Err(CalcError::FunctionNotCalled(identifier.name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::units::Unit;

    fn eval(input: &str) -> Result<UnitValue> {
        evaluate_expr(&parse(input)?)
    }

    #[test]
    fn literal_evaluates_to_itself() {
        assert_eq!(eval("3px"), Ok(UnitValue::with_unit(3.0, Unit::Px)));
    }

    #[test]
    fn negation_keeps_unit() {
        assert_eq!(eval("-(3px)"), Ok(UnitValue::with_unit(-3.0, Unit::Px)));
    }

    #[test]
    fn constant_is_unitless() {
        assert_eq!(eval("E"), Ok(UnitValue::unitless(std::f64::consts::E)));
    }

    #[test]
    fn function_without_call_is_rejected() {
        assert_eq!(
            eval("floor"),
            Err(CalcError::FunctionNotCalled("floor".to_string()))
        );
    }

    #[test]
    fn unit_preserving_functions() {
        assert_eq!(eval("ceil(2.1em)"), Ok(UnitValue::with_unit(3.0, Unit::Em)));
        assert_eq!(eval("abs(-4vh)"), Ok(UnitValue::with_unit(4.0, Unit::Vh)));
        assert_eq!(eval("cos(0mm)"), Ok(UnitValue::with_unit(1.0, Unit::Mm)));
    }

    #[test]
    fn other_functions_drop_the_unit() {
        assert_eq!(eval("sqrt(16px)"), Ok(UnitValue::unitless(4.0)));
        assert_eq!(eval("trunc(2.7)"), Ok(UnitValue::unitless(2.0)));
    }

    #[test]
    fn division_flag_is_cleared_by_function_application() {
        let ratio = eval("10px / 4px").unwrap();
        assert!(ratio.from_unit_division);
        let floored = eval("floor(10px / 4px)").unwrap();
        assert_eq!(floored.magnitude, 2.0);
        assert!(!floored.from_unit_division);
    }

    #[test]
    fn errors_from_either_side_propagate() {
        assert!(eval("(1px + 1em) * 2").is_err());
        assert!(eval("2 * (1px + 1em)").is_err());
    }
}
