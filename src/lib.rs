//! Scalar distance metrics with cached results and running totals.
//!
//! `distval` computes one number from a fixed list of numbers:
//!
//! - **Euclidean**: [`euclidean`], `sqrt(Σ x²)`
//! - **Manhattan**: [`manhattan`], `Σ |x|`
//! - **Cosine**: [`cosine`], the cosine between the list and its
//!   [`cosine_partner`] (the same list with its last element zeroed)
//!
//! A [`MetricValue`] wraps one list, computes its metric on demand, rounds the
//! result to [`PRECISION`] places, and records it in a [`Registry`] so that
//! running totals per metric can be queried. Computed values of the same
//! metric can be added, subtracted, and compared.
//!
//! # Ordering
//!
//! Euclidean and Manhattan results rank naturally. Cosine ranks inversely:
//! the smaller cosine result is the *greater* value.
//!
//! # Example
//!
//! ```rust
//! use distval::{MetricKind, MetricValue, Number, Registry};
//!
//! let registry = Registry::new();
//!
//! let mut a = MetricValue::new(MetricKind::Manhattan, [1, 0]).unwrap();
//! let mut b = MetricValue::new(MetricKind::Manhattan, [9, 10, 12]).unwrap();
//! a.compute_in(&registry).unwrap();
//! b.compute_in(&registry).unwrap();
//!
//! assert!(b.is_greater_than(&a).unwrap());
//! assert_eq!(a.add(&b).unwrap(), Number::Int(32));
//! assert_eq!(registry.totals()[&MetricKind::Manhattan], Number::Int(32));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dense;
mod error;
mod metric;
mod number;
mod registry;
mod value;

pub use dense::{cosine, cosine_partner, dot, euclidean, manhattan, norm, round_to};
pub use error::MetricError;
pub use metric::MetricKind;
pub use number::Number;
pub use registry::Registry;
pub use value::MetricValue;

/// Decimal places kept in a computed result.
///
/// The rounded value is what gets stored, displayed, recorded, and compared.
pub const PRECISION: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_outputs() {
        let registry = Registry::new();
        let cases: [(&[i64], i64); 5] = [
            (&[1, 2, 3], 6),
            (&[1, 0], 1),
            (&[9, 10, 12], 31),
            (&[-1, 2, -5], 8),
            (&[1, 2, 6, 12, -20], 41),
        ];
        for (input, expected) in cases {
            let mut v = MetricValue::new(MetricKind::Manhattan, input.iter().copied()).unwrap();
            assert_eq!(v.compute_in(&registry).unwrap(), Number::Int(expected));
        }
    }

    #[test]
    fn test_euclidean_outputs() {
        let registry = Registry::new();
        let cases: [(&[i64], f64); 3] = [(&[1, 2, 3], 3.742), (&[1, 0], 1.0), (&[9, 10, 12], 18.028)];
        for (input, expected) in cases {
            let mut v = MetricValue::new(MetricKind::Euclidean, input.iter().copied()).unwrap();
            assert_eq!(v.compute_in(&registry).unwrap(), Number::Float(expected));
        }
    }

    #[test]
    fn test_cosine_outputs() {
        let registry = Registry::new();
        let cases: [(&[i64], f64); 3] = [(&[1, 2, 3], 0.598), (&[1, 1], 0.707), (&[8, 9], 0.664)];
        for (input, expected) in cases {
            let mut v = MetricValue::new(MetricKind::Cosine, input.iter().copied()).unwrap();
            assert_eq!(v.compute_in(&registry).unwrap(), Number::Float(expected));
        }
    }
}
