//! Property-based tests using QuickCheck

use css_calc_rs::{CalcValue, Unit, evaluate, format_number};
use quickcheck::{QuickCheck, TestResult};

/// Property: unit-less arithmetic matches f64 arithmetic
#[test]
fn prop_unitless_arithmetic_matches_f64() {
    fn prop(a: u16, b: u16) -> TestResult {
        let (x, y) = (a as f64, b as f64);
        let cases = [
            ("+", x + y),
            ("-", x - y),
            ("*", x * y),
            ("/", x / y),
            ("^", x.powf(y)),
        ];
        for (op, expected) in cases {
            if expected.is_nan() {
                continue;
            }
            let expr = format!("{} {} {}", a, op, b);
            if evaluate(&expr) != Ok(CalcValue::Number(expected)) {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16, u16) -> TestResult);
}

/// Property: adding two values of the same unit keeps the unit
#[test]
fn prop_same_unit_addition_keeps_unit() {
    fn prop(a: u16, b: u16, index: usize) -> TestResult {
        let unit = Unit::ALL[index % Unit::ALL.len()];
        let expr = format!("{}{} + {}{}", a, unit, b, unit);
        let expected = format!("{}{}", format_number(a as f64 + b as f64), unit);
        TestResult::from_bool(evaluate(&expr) == Ok(CalcValue::Text(expected)))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16, u16, usize) -> TestResult);
}

/// Property: dividing equal units always cancels them
#[test]
fn prop_equal_unit_division_cancels() {
    fn prop(a: u16, b: u16, index: usize) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        let unit = Unit::ALL[index % Unit::ALL.len()];
        let expr = format!("{}{} / {}{}", a, unit, b, unit);
        let expected = format_number(a as f64 / b as f64);
        TestResult::from_bool(evaluate(&expr) == Ok(CalcValue::Text(expected)))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16, u16, usize) -> TestResult);
}

/// Property: mixing two different units in a sum never succeeds
#[test]
fn prop_mixed_unit_addition_fails() {
    fn prop(a: u16, b: u16, i: usize, j: usize) -> TestResult {
        let left = Unit::ALL[i % Unit::ALL.len()];
        let right = Unit::ALL[j % Unit::ALL.len()];
        if left == right {
            return TestResult::discard();
        }
        let expr = format!("{}{} + {}{}", a, left, b, right);
        TestResult::from_bool(evaluate(&expr).is_err())
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u16, u16, usize, usize) -> TestResult);
}
