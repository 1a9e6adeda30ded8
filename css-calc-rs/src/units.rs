use crate::error::{CalcError, Result, UnitLabel};
use std::fmt::Display;
use std::str::FromStr;

/// A length or percentage unit accepted as a numeric suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Em,
    Rem,
    Percent,
    Vh,
    Vw,
    Vmin,
    Vmax,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Unit::Px,
        Unit::Em,
        Unit::Rem,
        Unit::Percent,
        Unit::Vh,
        Unit::Vw,
        Unit::Vmin,
        Unit::Vmax,
        Unit::Cm,
        Unit::Mm,
        Unit::In,
        Unit::Pt,
        Unit::Pc,
    ];

    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.suffix() == suffix)
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// A magnitude with at most one unit attached.
///
/// `from_unit_division` marks a unit-less value obtained by cancelling two
/// equal units in a division. It only changes how the final result is
/// rendered and every operation returns a value with the flag cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitValue {
    pub magnitude: f64,
    pub unit: Option<Unit>,
    pub from_unit_division: bool,
}

impl UnitValue {
    pub fn new(magnitude: f64, unit: Option<Unit>) -> Self {
        UnitValue {
            magnitude,
            unit,
            from_unit_division: false,
        }
    }

    pub fn unitless(magnitude: f64) -> Self {
        UnitValue::new(magnitude, None)
    }

    pub fn with_unit(magnitude: f64, unit: Unit) -> Self {
        UnitValue::new(magnitude, Some(unit))
    }

    pub fn is_unitless(&self) -> bool {
        self.unit.is_none()
    }

    fn labels(&self, other: &UnitValue) -> (UnitLabel, UnitLabel) {
        (UnitLabel(self.unit), UnitLabel(other.unit))
    }

    pub fn negate(&self) -> UnitValue {
        UnitValue::new(-self.magnitude, self.unit)
    }

    pub fn add(&self, other: &UnitValue) -> Result<UnitValue> {
        if self.unit != other.unit {
            let (left, right) = self.labels(other);
            return Err(CalcError::UnitMismatch {
                operation: "add",
                left,
                right,
            });
        }
        Ok(UnitValue::new(self.magnitude + other.magnitude, self.unit))
    }

    pub fn subtract(&self, other: &UnitValue) -> Result<UnitValue> {
        if self.unit != other.unit {
            let (left, right) = self.labels(other);
            return Err(CalcError::UnitMismatch {
                operation: "subtract",
                left,
                right,
            });
        }
        Ok(UnitValue::new(self.magnitude - other.magnitude, self.unit))
    }

    pub fn multiply(&self, other: &UnitValue) -> Result<UnitValue> {
        let unit = match (self.unit, other.unit) {
            (Some(_), Some(_)) => {
                let (left, right) = self.labels(other);
                return Err(CalcError::MultiplyUnits { left, right });
            }
            (unit, None) | (None, unit) => unit,
        };
        Ok(UnitValue::new(self.magnitude * other.magnitude, unit))
    }

    pub fn divide(&self, other: &UnitValue) -> Result<UnitValue> {
        let magnitude = self.magnitude / other.magnitude;
        match (self.unit, other.unit) {
            (unit, None) => Ok(UnitValue::new(magnitude, unit)),
            (Some(lhs), Some(rhs)) if lhs == rhs => Ok(UnitValue {
                magnitude,
                unit: None,
                from_unit_division: true,
            }),
            _ => {
                let (left, right) = self.labels(other);
                Err(CalcError::DivideUnits { left, right })
            }
        }
    }

    pub fn pow(&self, exponent: &UnitValue) -> Result<UnitValue> {
        if !self.is_unitless() || !exponent.is_unitless() {
            return Err(CalcError::PowerUnits);
        }
        Ok(UnitValue::unitless(self.magnitude.powf(exponent.magnitude)))
    }
}

/// Renders a magnitude the way ECMAScript's `Number#toString` does for the
/// values this crate produces.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl Display for UnitValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_number(self.magnitude))?;
        if let Some(unit) = self.unit {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

impl FromStr for UnitValue {
    type Err = CalcError;

    /// Parses a numeric literal with an optional unit suffix, e.g. `12.5px`.
    fn from_str(s: &str) -> Result<Self> {
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);
        let magnitude: f64 = number
            .parse()
            .map_err(|_| CalcError::MalformedNumber(s.to_string()))?;
        if suffix.is_empty() {
            return Ok(UnitValue::unitless(magnitude));
        }
        match Unit::from_suffix(suffix) {
            Some(unit) => Ok(UnitValue::with_unit(magnitude, unit)),
            None => Err(CalcError::MalformedNumber(s.to_string())),
        }
    }
}
