use css_calc_rs::{CalcValue, evaluate, parse};

#[test]
fn successfully_parse_integer_string() {
    assert_eq!(parse("45").unwrap().to_string(), "45");
    assert_eq!(evaluate("45"), Ok(CalcValue::Number(45.0)));
}

#[test]
fn successfully_parse_leading_zero() {
    assert_eq!(evaluate("01"), Ok(CalcValue::Number(1.0)));
    assert_eq!(evaluate("0"), Ok(CalcValue::Number(0.0)));
}

#[test]
fn successfully_parse_float_string() {
    assert_eq!(evaluate("45.25"), Ok(CalcValue::Number(45.25)));
    assert_eq!(evaluate(".5"), Ok(CalcValue::Number(0.5)));
    assert_eq!(evaluate("5."), Ok(CalcValue::Number(5.0)));
}

#[test]
fn successfully_parse_signed_numbers() {
    assert_eq!(evaluate("+45"), Ok(CalcValue::Number(45.0)));
    assert_eq!(evaluate("-5"), Ok(CalcValue::Number(-5.0)));
    assert_eq!(evaluate("-45.5"), Ok(CalcValue::Number(-45.5)));
}

#[test]
fn fails_to_parse_number_seperated_by_space() {
    assert!(evaluate("45 0").is_err());
}

#[test]
fn fails_to_parse_exponent_notation() {
    assert!(evaluate("45.0e10").is_err());
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("  1+2  "), Ok(CalcValue::Number(3.0)));
    assert_eq!(evaluate("1\n+\t2"), Ok(CalcValue::Number(3.0)));
}
