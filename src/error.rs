//! Error type shared by construction, computation, and the binary operations.

use thiserror::Error;

use crate::MetricKind;

/// Every way a [`MetricValue`](crate::MetricValue) operation can fail.
///
/// Failures never leave partial state behind: an instance or the registry is
/// only mutated once the operation is certain to succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    /// The metric name is not one of `euclidean`, `manhattan`, `cosine`.
    #[error("unknown metric '{0}': select one of euclidean, manhattan, cosine")]
    InvalidMetric(String),

    /// No values were supplied.
    #[error("no values supplied")]
    EmptyInput,

    /// An element is not an integer or floating-point number.
    #[error("value '{0}' is not a number")]
    InvalidValue(String),

    /// A binary operation was attempted across two different metrics.
    #[error("cannot combine {left} and {right} distances")]
    MetricMismatch {
        /// Metric of the left operand.
        left: MetricKind,
        /// Metric of the right operand.
        right: MetricKind,
    },

    /// An operand has not run `compute()` yet.
    #[error("one or both operands have not computed a distance")]
    NotComputed,

    /// The formula hit a degenerate case (zero cosine denominator).
    #[error("computation failed: {0}")]
    ComputationError(String),
}
