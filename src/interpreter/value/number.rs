use std::{cmp::Ordering, fmt};

use crate::util::num::f64_to_i64_checked;

/// A language number: an integer or a floating-point value.
///
/// Integers and floats interoperate through promotion. Equality and ordering
/// are numeric, so `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
}

impl Number {
    /// The value as an `f64`. Large integers round to the nearest float.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// The value as an `i64` if it is integral.
    ///
    /// Floats qualify when they are finite, whole and in range.
    ///
    /// # Example
    /// ```
    /// use aslang::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Float(3.0).to_integral(), Some(3));
    /// assert_eq!(Number::Float(3.5).to_integral(), None);
    /// assert_eq!(Number::Int(-2).to_integral(), Some(-2));
    /// ```
    #[must_use]
    pub fn to_integral(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            Self::Float(f) => f64_to_i64_checked(f, ()).ok(),
        }
    }

    /// Returns `true` for zero of either kind.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Returns `true` for values strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(n) => n < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    /// Negates the value, or `None` when an integer negation overflows.
    #[must_use]
    pub fn checked_neg(self) -> Option<Self> {
        match self {
            Self::Int(n) => n.checked_neg().map(Self::Int),
            Self::Float(f) => Some(Self::Float(-f)),
        }
    }

    /// Name of the number type as shown in diagnostics.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

/// Formats a float so that it always reads back as a float.
///
/// Whole values keep a trailing `.0`, very large or very small magnitudes use
/// an exponent with an explicit sign and at least two digits.
///
/// # Example
/// ```
/// use aslang::interpreter::value::number::format_float;
///
/// assert_eq!(format_float(8.0), "8.0");
/// assert_eq!(format_float(0.5), "0.5");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(1.5e-7), "1.5e-07");
/// assert_eq!(format_float(f64::NAN), "nan");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = exponent.strip_prefix('-')
                                             .map_or(("+", exponent), |digits| ("-", digits));
                format!("{mantissa}e{sign}{digits:0>2}")
            },
            None => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_numbers_compare_numerically() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert!(Number::Int(2) < Number::Float(2.5));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
        assert_eq!(Number::Float(f64::NAN).partial_cmp(&Number::Int(1)), None);
    }

    #[test]
    fn integer_negation_overflow_is_detected() {
        assert_eq!(Number::Int(i64::MIN).checked_neg(), None);
        assert_eq!(Number::Int(5).checked_neg(), Some(Number::Int(-5)));
    }

    #[test]
    fn floats_keep_their_fractional_marker() {
        assert_eq!(Number::Float(-3.0).to_string(), "-3.0");
        assert_eq!(Number::Float(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Number::Float(123_456.789).to_string(), "123456.789");
        assert_eq!(Number::Int(42).to_string(), "42");
    }
}
