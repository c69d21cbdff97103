//! The distance formulas over a dense sequence of [`Number`]s.
//!
//! Core operations: dot product, norm, and the three metric formulas.
//!
//! | Metric | Formula | Result type |
//! |--------|---------|-------------|
//! | Euclidean | `sqrt(Σ x[i]²)` | float |
//! | Manhattan | `Σ |x[i]|` | integer when every input is an integer |
//! | Cosine | `dot(x, p) / (norm(x) * norm(p))`, `p` = cosine partner | float |

use crate::{MetricError, Number};

/// Dot product of two sequences: `Σ(a[i] * b[i])`.
///
/// Mismatched lengths use the shorter length. Returns 0.0 for empty input.
///
/// ```rust
/// use distval::{dot, Number};
///
/// let a = [Number::Int(1), Number::Int(2), Number::Int(3)];
/// let b = [Number::Int(4), Number::Int(5), Number::Int(6)];
/// assert_eq!(dot(&a, &b), 32.0);
/// ```
#[inline]
#[must_use]
pub fn dot(a: &[Number], b: &[Number]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.as_f64() * y.as_f64())
        .sum()
}

/// L2 norm of a sequence: `sqrt(Σ(v[i]²))`.
#[inline]
#[must_use]
pub fn norm(v: &[Number]) -> f64 {
    dot(v, v).sqrt()
}

/// Euclidean distance from the origin. Same as [`norm`].
///
/// ```rust
/// use distval::{euclidean, Number};
///
/// let v = [Number::Int(3), Number::Int(4)];
/// assert_eq!(euclidean(&v), 5.0);
/// ```
#[inline]
#[must_use]
pub fn euclidean(v: &[Number]) -> f64 {
    norm(v)
}

/// Manhattan distance from the origin: `Σ |v[i]|`.
///
/// Stays an integer when every element is an integer.
#[inline]
#[must_use]
pub fn manhattan(v: &[Number]) -> Number {
    v.iter().map(|x| x.abs()).sum()
}

/// The comparison vector used by [`cosine`]: a copy of `v` with its last
/// element set to zero. Empty input yields an empty partner.
#[must_use]
pub fn cosine_partner(v: &[Number]) -> Vec<Number> {
    let mut partner = v.to_vec();
    if let Some(last) = partner.last_mut() {
        *last = Number::Int(0);
    }
    partner
}

/// Cosine between `v` and its [`cosine_partner`].
///
/// This is not the usual similarity between two independent vectors: the
/// second vector is always derived from the first.
///
/// # Errors
///
/// [`MetricError::ComputationError`] when either norm is zero, e.g. a
/// single-element input (its partner is `[0]`) or an all-zero input, and
/// when the input overflows or holds NaN/infinity so the quotient is not finite.
///
/// ```rust
/// use distval::{cosine, Number};
///
/// let v = [Number::Int(1), Number::Int(1)];
/// assert!((cosine(&v).unwrap() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!(cosine(&[Number::Int(5)]).is_err());
/// ```
pub fn cosine(v: &[Number]) -> Result<f64, MetricError> {
    let partner = cosine_partner(v);
    let d = dot(v, &partner);
    let na = norm(v);
    let nb = norm(&partner);
    if !na.is_finite() || !nb.is_finite() || na == 0.0 || nb == 0.0 {
        return Err(MetricError::ComputationError(format!(
            "cosine denominator is degenerate (norm {na} x partner norm {nb})"
        )));
    }
    let c = d / (na * nb);
    if !c.is_finite() {
        return Err(MetricError::ComputationError(format!(
            "cosine is not finite (dot {d} / {})",
            na * nb
        )));
    }
    Ok(c)
}

/// Round to `places` decimal places.
///
/// Rounds the exact binary value with ties to even, so `0.0625` becomes
/// `0.062` and `1.0005` (stored just below the tie) becomes `1.0`.
/// Non-finite input comes back unchanged.
#[must_use]
pub fn round_to(x: f64, places: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.prec$}", prec = places as usize)
        .parse()
        .unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(v: &[i64]) -> Vec<Number> {
        v.iter().copied().map(Number::Int).collect()
    }

    #[test]
    fn test_dot_shorter_length_wins() {
        let a = ints(&[1, 2, 3]);
        let b = ints(&[4, 5]);
        assert_eq!(dot(&a, &b), 14.0);
    }

    #[test]
    fn test_dot_empty() {
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn test_manhattan_int_and_float() {
        assert_eq!(manhattan(&ints(&[-1, 2, -5])), Number::Int(8));
        assert!(manhattan(&ints(&[-1, 2, -5])).is_int());
        let mixed = [Number::Int(1), Number::Float(-0.5)];
        assert!(!manhattan(&mixed).is_int());
    }

    #[test]
    fn test_partner_zeroes_last_only() {
        let p = cosine_partner(&ints(&[4, 5, 6]));
        assert_eq!(p, ints(&[4, 5, 0]));
        assert!(cosine_partner(&[]).is_empty());
    }

    #[test]
    fn test_cosine_zero_denominator() {
        assert!(matches!(
            cosine(&ints(&[0, 0, 3])),
            Err(MetricError::ComputationError(_))
        ));
        assert!(matches!(
            cosine(&ints(&[7])),
            Err(MetricError::ComputationError(_))
        ));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.741_657, 3), 3.742);
        assert_eq!(round_to(0.597_614, 3), 0.598);
        assert_eq!(round_to(1.0, 3), 1.0);
    }

    #[test]
    fn test_round_to_exact_ties_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(1.0005, 3), 1.0);
        assert_eq!(round_to(0.0635, 3), 0.064);
        assert_eq!(round_to(-0.0625, 3), -0.062);
        assert!(round_to(f64::NAN, 3).is_nan());
    }

    #[test]
    fn test_cosine_non_finite_fails() {
        let huge = [Number::Float(1e200), Number::Float(1e200)];
        assert!(matches!(cosine(&huge), Err(MetricError::ComputationError(_))));
        let nan = [Number::Float(f64::NAN), Number::Int(1)];
        assert!(matches!(cosine(&nan), Err(MetricError::ComputationError(_))));
        let inf = [Number::Float(f64::INFINITY), Number::Int(1)];
        assert!(cosine(&inf).is_err());
    }
}
