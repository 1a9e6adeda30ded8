//! Identifier resolution.
//!
//! Identifiers are resolved once while parsing, either to a numeric constant
//! or to a function of one number. The default table mirrors the members of
//! the ECMAScript `Math` object whose names contain only letters, applied to a
//! single argument: `max`, `min` and `hypot` therefore reduce to identity and
//! absolute value.

use phf::phf_map;
use std::collections::HashMap;
use std::f64::consts;

#[derive(Debug, Clone, Copy)]
pub struct UnaryFunction {
    pub apply: fn(f64) -> f64,
    /// Whether the result carries the unit of the argument.
    pub keeps_unit: bool,
}

impl UnaryFunction {
    pub const fn new(apply: fn(f64) -> f64) -> Self {
        UnaryFunction {
            apply,
            keeps_unit: false,
        }
    }

    pub const fn unit_preserving(apply: fn(f64) -> f64) -> Self {
        UnaryFunction {
            apply,
            keeps_unit: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Resolved {
    Constant(f64),
    UnaryFunction(UnaryFunction),
}

pub trait Scope {
    fn resolve(&self, name: &str) -> Option<Resolved>;
}

fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() { x } else { x.signum() }
}

fn round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn fround(x: f64) -> f64 {
    x as f32 as f64
}

fn identity(x: f64) -> f64 {
    x
}

static MATH: phf::Map<&'static str, Resolved> = phf_map! {
    "PI" => Resolved::Constant(consts::PI),
    "E" => Resolved::Constant(consts::E),

    "floor" => Resolved::UnaryFunction(UnaryFunction::unit_preserving(f64::floor)),
    "ceil" => Resolved::UnaryFunction(UnaryFunction::unit_preserving(f64::ceil)),
    "abs" => Resolved::UnaryFunction(UnaryFunction::unit_preserving(f64::abs)),
    "cos" => Resolved::UnaryFunction(UnaryFunction::unit_preserving(f64::cos)),

    "acos" => Resolved::UnaryFunction(UnaryFunction::new(f64::acos)),
    "acosh" => Resolved::UnaryFunction(UnaryFunction::new(f64::acosh)),
    "asin" => Resolved::UnaryFunction(UnaryFunction::new(f64::asin)),
    "asinh" => Resolved::UnaryFunction(UnaryFunction::new(f64::asinh)),
    "atan" => Resolved::UnaryFunction(UnaryFunction::new(f64::atan)),
    "atanh" => Resolved::UnaryFunction(UnaryFunction::new(f64::atanh)),
    "cbrt" => Resolved::UnaryFunction(UnaryFunction::new(f64::cbrt)),
    "cosh" => Resolved::UnaryFunction(UnaryFunction::new(f64::cosh)),
    "exp" => Resolved::UnaryFunction(UnaryFunction::new(f64::exp)),
    "fround" => Resolved::UnaryFunction(UnaryFunction::new(fround)),
    "hypot" => Resolved::UnaryFunction(UnaryFunction::new(f64::abs)),
    "log" => Resolved::UnaryFunction(UnaryFunction::new(f64::ln)),
    "max" => Resolved::UnaryFunction(UnaryFunction::new(identity)),
    "min" => Resolved::UnaryFunction(UnaryFunction::new(identity)),
    "round" => Resolved::UnaryFunction(UnaryFunction::new(round)),
    "sign" => Resolved::UnaryFunction(UnaryFunction::new(sign)),
    "sin" => Resolved::UnaryFunction(UnaryFunction::new(f64::sin)),
    "sinh" => Resolved::UnaryFunction(UnaryFunction::new(f64::sinh)),
    "sqrt" => Resolved::UnaryFunction(UnaryFunction::new(f64::sqrt)),
    "tan" => Resolved::UnaryFunction(UnaryFunction::new(f64::tan)),
    "tanh" => Resolved::UnaryFunction(UnaryFunction::new(f64::tanh)),
    "trunc" => Resolved::UnaryFunction(UnaryFunction::new(f64::trunc)),
};

/// The built-in table of math constants and functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathScope;

impl Scope for MathScope {
    fn resolve(&self, name: &str) -> Option<Resolved> {
        MATH.get(name).copied()
    }
}

impl Scope for HashMap<String, Resolved> {
    fn resolve(&self, name: &str) -> Option<Resolved> {
        self.get(name).copied()
    }
}
