//! Input elements: integers and floating-point numbers.
//!
//! Integers stay integers through the formulas that can keep them exact
//! (Manhattan) and through `add`/`subtract`, so `Manhattan [1, 2, 3]`
//! reports `6` rather than `6.0`. Anything touched by a float becomes a float.
//!
//! There is deliberately no `From<bool>`: a boolean is not a number here.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::MetricError;

/// A single numeric element of a [`MetricValue`](crate::MetricValue).
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Integer element.
    Int(i64),
    /// Floating-point element.
    Float(f64),
}

impl Number {
    /// Parse a command-line token.
    ///
    /// Integer literals become [`Number::Int`], other float literals become
    /// [`Number::Float`]. Anything else (including `true`/`false`) fails with
    /// [`MetricError::InvalidValue`].
    ///
    /// ```rust
    /// use distval::Number;
    ///
    /// assert_eq!(Number::parse("-5").unwrap(), Number::Int(-5));
    /// assert_eq!(Number::parse("3.4").unwrap(), Number::Float(3.4));
    /// assert!(Number::parse("true").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, MetricError> {
        let trimmed = token.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| MetricError::InvalidValue(token.to_string()))
    }

    /// Value as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Absolute value. `i64::MIN` promotes to float.
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        match self {
            Number::Int(i) => i.checked_abs().map_or(Number::Float((i as f64).abs()), Number::Int),
            Number::Float(f) => Number::Float(f.abs()),
        }
    }

    /// Round to `places` decimal places. Integers are already exact.
    #[inline]
    #[must_use]
    pub fn round_to(self, places: u32) -> Self {
        match self {
            Number::Int(_) => self,
            Number::Float(f) => Number::Float(crate::dense::round_to(f, places)),
        }
    }

    /// `true` for [`Number::Int`].
    #[inline]
    #[must_use]
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(i64::from(v))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Self {
        Number::Int(i64::from(v))
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or(Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map_or(Number::Float(a as f64 - b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl std::iter::Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(Number::Int(0), |acc, n| acc + n)
    }
}

// Int(6) == Float(6.0): equality and ordering are numeric, not structural.
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) if x.is_nan() => write!(f, "nan"),
            Number::Float(x) if x.is_infinite() => write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" }),
            Number::Float(x) if x != 0.0 && (x.abs() >= 1e16 || x.abs() < 1e-4) => {
                write_exponent(f, x)
            }
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

// `1e+20`, `1.5e-07`: signed exponent, at least two digits.
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let formatted = format!("{x:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// Render a sequence as `[a, b, c]`.
pub(crate) fn format_list(values: &[Number]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
