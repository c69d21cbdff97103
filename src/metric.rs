//! The supported metrics and their formula dispatch.

use std::fmt;
use std::str::FromStr;

use crate::{dense, MetricError, Number};

/// Which formula a [`MetricValue`](crate::MetricValue) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    /// `sqrt(Σ x²)`
    Euclidean,
    /// `Σ |x|`
    Manhattan,
    /// Cosine between the values and their cosine partner.
    Cosine,
}

impl MetricKind {
    /// All kinds, in display order.
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Euclidean,
        MetricKind::Manhattan,
        MetricKind::Cosine,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::Manhattan => "manhattan",
            MetricKind::Cosine => "cosine",
        }
    }

    /// Evaluate this metric's formula over `values`, unrounded.
    ///
    /// # Errors
    ///
    /// Only [`MetricKind::Cosine`] can fail, see [`dense::cosine`].
    pub fn evaluate(self, values: &[Number]) -> Result<Number, MetricError> {
        match self {
            MetricKind::Euclidean => Ok(Number::Float(dense::euclidean(values))),
            MetricKind::Manhattan => Ok(dense::manhattan(values)),
            MetricKind::Cosine => dense::cosine(values).map(Number::Float),
        }
    }

    /// Whether a larger result ranks as "greater".
    ///
    /// Cosine ranks inversely: a smaller cosine result is the greater value.
    #[inline]
    #[must_use]
    pub fn ranks_inverted(self) -> bool {
        matches!(self, MetricKind::Cosine)
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MetricError::InvalidMetric(s.to_string()))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("euclidean".parse::<MetricKind>(), Ok(MetricKind::Euclidean));
        assert_eq!("Manhattan".parse::<MetricKind>(), Ok(MetricKind::Manhattan));
        assert_eq!(" COSINE ".parse::<MetricKind>(), Ok(MetricKind::Cosine));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "chebyshev".parse::<MetricKind>(),
            Err(MetricError::InvalidMetric("chebyshev".to_string()))
        );
        assert!("".parse::<MetricKind>().is_err());
    }

    #[test]
    fn test_name_round_trips_display() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.to_string().parse::<MetricKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_only_cosine_inverts() {
        assert!(MetricKind::Cosine.ranks_inverted());
        assert!(!MetricKind::Euclidean.ranks_inverted());
        assert!(!MetricKind::Manhattan.ranks_inverted());
    }
}
