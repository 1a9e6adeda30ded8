use css_calc_rs::{
    CalcValue, ErrorKind, MathScope, Resolved, UnaryFunction, evaluate, evaluate_with_scope,
};
use std::collections::HashMap;

#[test]
fn evaluates_mixed_expression() {
    assert_eq!(
        evaluate("(100% - 2 * 10%) / 4"),
        Ok(CalcValue::Text("20%".to_string()))
    );
    assert_eq!(
        evaluate("floor(10.5px * 2) - 1px"),
        Ok(CalcValue::Text("20px".to_string()))
    );
}

#[test]
fn evaluation_is_idempotent() {
    for input in ["10px / 5px", "floor(3.7px)", "2 ^ 3", "PI", "1 + foo"] {
        assert_eq!(evaluate(input), evaluate(input), "{}", input);
    }
}

#[test]
fn explicit_default_scope_matches_evaluate() {
    assert_eq!(evaluate_with_scope("ceil(PI)", &MathScope), evaluate("ceil(PI)"));
}

#[test]
fn custom_scope_replaces_the_default_table() {
    fn double(x: f64) -> f64 {
        x * 2.0
    }
    let mut scope = HashMap::new();
    scope.insert("TAU".to_string(), Resolved::Constant(std::f64::consts::TAU));
    scope.insert(
        "double".to_string(),
        Resolved::UnaryFunction(UnaryFunction::unit_preserving(double)),
    );
    scope.insert(
        "ratio".to_string(),
        Resolved::UnaryFunction(UnaryFunction::new(double)),
    );

    assert_eq!(
        evaluate_with_scope("TAU", &scope),
        Ok(CalcValue::Number(std::f64::consts::TAU))
    );
    assert_eq!(
        evaluate_with_scope("double(3px)", &scope),
        Ok(CalcValue::Text("6px".to_string()))
    );
    assert_eq!(
        evaluate_with_scope("ratio(3px)", &scope),
        Ok(CalcValue::Number(6.0))
    );
    assert_eq!(
        evaluate_with_scope("PI", &scope).unwrap_err().kind(),
        ErrorKind::UnknownIdentifier
    );
}

#[test]
fn result_display() {
    assert_eq!(evaluate("1 / 4").unwrap().to_string(), "0.25");
    assert_eq!(evaluate("3px * 2").unwrap().to_string(), "6px");
    assert_eq!(evaluate("-0").unwrap().to_string(), "0");
}
