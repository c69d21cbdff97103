//! [`MetricValue`]: a fixed sequence of numbers with a lazily computed distance.

use std::fmt;
use std::time::{Duration, Instant};

use crate::number::format_list;
use crate::{MetricError, MetricKind, Number, Registry, PRECISION};

/// A metric over a fixed, non-empty list of numbers.
///
/// The input is copied at construction and never changes. `result` is `0`
/// until [`compute`](Self::compute) succeeds; every binary operation refuses
/// to run on an uncomputed operand instead of using that placeholder.
///
/// # Example
///
/// ```rust
/// use distval::{MetricKind, MetricValue, Number, Registry};
///
/// let registry = Registry::new();
/// let mut a = MetricValue::new(MetricKind::Manhattan, [1, 2, 3]).unwrap();
/// assert_eq!(a.compute_in(&registry).unwrap(), Number::Int(6));
/// assert_eq!(
///     a.to_string(),
///     "The manhattan distance for the set of numbers [1, 2, 3] is 6"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MetricValue {
    kind: MetricKind,
    values: Vec<Number>,
    computed: bool,
    result: Number,
    elapsed: Duration,
}

impl MetricValue {
    /// Build from a kind and a non-empty sequence.
    ///
    /// # Errors
    ///
    /// [`MetricError::EmptyInput`] when `values` yields nothing.
    pub fn new<I, N>(kind: MetricKind, values: I) -> Result<Self, MetricError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        let values: Vec<Number> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(MetricError::EmptyInput);
        }
        Ok(Self {
            kind,
            values,
            computed: false,
            result: Number::default(),
            elapsed: Duration::ZERO,
        })
    }

    /// Build from a metric name.
    ///
    /// # Errors
    ///
    /// [`MetricError::InvalidMetric`] for an unknown name, then
    /// [`MetricError::EmptyInput`] as in [`new`](Self::new).
    pub fn with_metric<I, N>(metric: &str, values: I) -> Result<Self, MetricError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        Self::new(metric.parse()?, values)
    }

    /// Build from a metric name and textual numbers, as a command line supplies them.
    ///
    /// Checks run in order: metric name, emptiness, then each token.
    ///
    /// # Errors
    ///
    /// [`MetricError::InvalidMetric`], [`MetricError::EmptyInput`], or
    /// [`MetricError::InvalidValue`] naming the first bad token.
    pub fn parse<S: AsRef<str>>(metric: &str, tokens: &[S]) -> Result<Self, MetricError> {
        let kind: MetricKind = metric.parse()?;
        if tokens.is_empty() {
            return Err(MetricError::EmptyInput);
        }
        let values = tokens
            .iter()
            .map(|t| Number::parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kind, values)
    }

    /// The metric.
    #[must_use]
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// The stored input sequence.
    #[must_use]
    pub fn values(&self) -> &[Number] {
        &self.values
    }

    /// Whether [`compute`](Self::compute) has succeeded at least once.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// The rounded result, `0` before the first successful compute.
    #[must_use]
    pub fn result(&self) -> Number {
        self.result
    }

    /// Wall-clock time of the last successful formula evaluation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Evaluate this instance's formula, unrounded and without recording anything.
    ///
    /// `values` defaults to the stored sequence when `None`.
    ///
    /// # Errors
    ///
    /// [`MetricError::ComputationError`] for a zero cosine denominator.
    pub fn evaluate(&self, values: Option<&[Number]>) -> Result<Number, MetricError> {
        self.kind.evaluate(values.unwrap_or(&self.values))
    }

    /// Compute, round, and record into [`Registry::global`].
    ///
    /// See [`compute_in`](Self::compute_in).
    ///
    /// # Errors
    ///
    /// [`MetricError::ComputationError`] for a zero cosine denominator.
    pub fn compute(&mut self) -> Result<Number, MetricError> {
        self.compute_in(Registry::global())
    }

    /// Compute the distance, round it to [`PRECISION`] places, store it,
    /// and append it to `registry`.
    ///
    /// Calling this again recomputes and appends again, so the registry
    /// counts the same instance once per call.
    ///
    /// # Errors
    ///
    /// [`MetricError::ComputationError`] for a zero cosine denominator. On
    /// error neither the instance nor the registry is touched.
    pub fn compute_in(&mut self, registry: &Registry) -> Result<Number, MetricError> {
        let start = Instant::now();
        let raw = self.evaluate(None)?;
        let elapsed = start.elapsed();

        let rounded = raw.round_to(PRECISION);
        self.result = rounded;
        self.elapsed = elapsed;
        self.computed = true;
        registry.record(self.kind, rounded);

        log::debug!(
            "{} over {} values = {} in {:?}",
            self.kind,
            self.values.len(),
            rounded,
            elapsed
        );
        Ok(rounded)
    }

    /// A new, uncomputed instance holding `self`'s values followed by `other`'s.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] when the kinds differ.
    pub fn concatenate(&self, other: &MetricValue) -> Result<MetricValue, MetricError> {
        self.same_kind(other)?;
        Self::new(
            self.kind,
            self.values.iter().chain(other.values.iter()).copied(),
        )
    }

    /// Compact form: `MetricValue: [1, 2, 3]`.
    #[must_use]
    pub fn compact(&self) -> String {
        format!("MetricValue: {}", format_list(&self.values))
    }

    /// Sum of both results.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &MetricValue) -> Result<Number, MetricError> {
        self.comparable(other)?;
        Ok(self.result + other.result)
    }

    /// `self`'s result minus `other`'s.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    pub fn subtract(&self, other: &MetricValue) -> Result<Number, MetricError> {
        self.comparable(other)?;
        Ok(self.result - other.result)
    }

    /// Exact equality of the rounded results.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    pub fn equals(&self, other: &MetricValue) -> Result<bool, MetricError> {
        self.comparable(other)?;
        Ok(self.result == other.result)
    }

    /// `self > other`. For cosine, the smaller result is the greater value.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    pub fn is_greater_than(&self, other: &MetricValue) -> Result<bool, MetricError> {
        let (a, b) = self.ranked(other)?;
        Ok(a > b)
    }

    /// `self < other`. For cosine, the larger result is the lesser value.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    pub fn is_less_than(&self, other: &MetricValue) -> Result<bool, MetricError> {
        let (a, b) = self.ranked(other)?;
        Ok(a < b)
    }

    /// `self >= other`, with the cosine inversion.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    pub fn is_greater_or_equal(&self, other: &MetricValue) -> Result<bool, MetricError> {
        let (a, b) = self.ranked(other)?;
        Ok(a >= b)
    }

    /// `self <= other`, with the cosine inversion.
    ///
    /// # Errors
    ///
    /// [`MetricError::MetricMismatch`] or [`MetricError::NotComputed`].
    pub fn is_less_or_equal(&self, other: &MetricValue) -> Result<bool, MetricError> {
        let (a, b) = self.ranked(other)?;
        Ok(a <= b)
    }

    fn same_kind(&self, other: &MetricValue) -> Result<(), MetricError> {
        if self.kind != other.kind {
            return Err(MetricError::MetricMismatch {
                left: self.kind,
                right: other.kind,
            });
        }
        Ok(())
    }

    fn comparable(&self, other: &MetricValue) -> Result<(), MetricError> {
        self.same_kind(other)?;
        if !self.computed || !other.computed {
            return Err(MetricError::NotComputed);
        }
        Ok(())
    }

    // Operand pair in ranking order: swapped for cosine.
    fn ranked(&self, other: &MetricValue) -> Result<(Number, Number), MetricError> {
        self.comparable(other)?;
        if self.kind.ranks_inverted() {
            Ok((other.result, self.result))
        } else {
            Ok((self.result, other.result))
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} distance for the set of numbers {} is {}",
            self.kind,
            format_list(&self.values),
            self.result.round_to(PRECISION)
        )
    }
}
