//! Running record of every computed result, per metric.
//!
//! [`MetricValue::compute`](crate::MetricValue::compute) appends to the
//! process-wide [`Registry::global`]. Tests and embedders that need isolation
//! construct their own [`Registry`] and pass it to
//! [`MetricValue::compute_in`](crate::MetricValue::compute_in).

use std::collections::BTreeMap;

use parking_lot::{const_mutex, Mutex};

use crate::{MetricKind, Number};

static GLOBAL: Registry = Registry::new();

/// Mapping from metric kind to the ordered list of recorded results.
///
/// Each append and each read holds the lock for its whole duration, so a
/// kind's list reflects exactly the computations that have completed.
#[derive(Debug)]
pub struct Registry {
    recorded: Mutex<BTreeMap<MetricKind, Vec<Number>>>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recorded: const_mutex(BTreeMap::new()),
        }
    }

    /// The process-wide registry. Starts empty and lives until exit.
    #[must_use]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Append `result` under `kind`.
    pub fn record(&self, kind: MetricKind, result: Number) {
        let mut recorded = self.recorded.lock();
        let list = recorded.entry(kind).or_default();
        list.push(result);
        log::trace!("recorded {kind} result {result} ({} total)", list.len());
    }

    /// Sum of recorded results for every kind that has at least one entry.
    #[must_use]
    pub fn totals(&self) -> BTreeMap<MetricKind, Number> {
        self.recorded
            .lock()
            .iter()
            .map(|(kind, list)| (*kind, list.iter().copied().sum()))
            .collect()
    }

    /// The recorded results for `kind`, in insertion order.
    #[must_use]
    pub fn recorded(&self, kind: MetricKind) -> Vec<Number> {
        self.recorded
            .lock()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.recorded.lock().clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
