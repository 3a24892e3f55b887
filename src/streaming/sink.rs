//! Output channels of the streaming estimator.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, warn};

use super::state::StateReport;
use crate::error::ApenError;

/// Receiver for everything the estimator emits.
///
/// Only [`entropy`](Self::entropy) is required; the diagnostic channels
/// default to doing nothing. Methods are never called while the estimator
/// holds its history lock, so an implementation may call back into the
/// estimator.
pub trait EntropySink: Send + Sync {
    /// A freshly computed approximate entropy value.
    fn entropy(&self, value: f64);

    /// A computation was attempted with fewer than `needed` samples.
    fn insufficient_data(&self, needed: usize, got: usize) {
        let _ = (needed, got);
    }

    /// Ordered listing of the retained samples, oldest first.
    fn values(&self, values: &[f64]) {
        let _ = values;
    }

    /// Configuration and occupancy report.
    fn state(&self, report: &StateReport) {
        let _ = report;
    }

    /// A setter or an input was rejected.
    fn configuration_error(&self, error: &ApenError) {
        let _ = error;
    }
}

impl<S: EntropySink + ?Sized> EntropySink for Arc<S> {
    fn entropy(&self, value: f64) {
        (**self).entropy(value)
    }

    fn insufficient_data(&self, needed: usize, got: usize) {
        (**self).insufficient_data(needed, got)
    }

    fn values(&self, values: &[f64]) {
        (**self).values(values)
    }

    fn state(&self, report: &StateReport) {
        (**self).state(report)
    }

    fn configuration_error(&self, error: &ApenError) {
        (**self).configuration_error(error)
    }
}

/// Sink that reports every emission as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EntropySink for TracingSink {
    fn entropy(&self, value: f64) {
        info!(apen = value, "approximate entropy");
    }

    fn insufficient_data(&self, needed: usize, got: usize) {
        warn!(needed, got, "need {} data points, have {}", needed, got);
    }

    fn values(&self, values: &[f64]) {
        info!(count = values.len(), ?values, "values");
    }

    fn state(&self, report: &StateReport) {
        info!(
            capacity = report.capacity,
            length = report.length,
            pattern_length = report.pattern_length,
            similarity_radius = report.similarity_radius,
            auto_recompute = report.auto_recompute,
            warn_on_insufficient_data = report.warn_on_insufficient_data,
            "state"
        );
    }

    fn configuration_error(&self, error: &ApenError) {
        error!(%error, "configuration rejected");
    }
}

/// A single emission recorded by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Entropy(f64),
    InsufficientData { needed: usize, got: usize },
    Values(Vec<f64>),
    State(StateReport),
    ConfigurationError(ApenError),
}

/// Sink that keeps every emission in arrival order.
///
/// Wrap it in an `Arc` to keep a handle after handing it to the estimator.
#[derive(Debug, Default)]
pub struct CollectingSink {
    emissions: Mutex<Vec<Emission>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.lock().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Emission> {
        std::mem::take(&mut *self.emissions.lock())
    }

    /// Only the entropy values, in emission order.
    pub fn entropies(&self) -> Vec<f64> {
        self.emissions
            .lock()
            .iter()
            .filter_map(|e| match e {
                Emission::Entropy(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.emissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.lock().is_empty()
    }

    fn push(&self, emission: Emission) {
        self.emissions.lock().push(emission);
    }
}

impl EntropySink for CollectingSink {
    fn entropy(&self, value: f64) {
        self.push(Emission::Entropy(value));
    }

    fn insufficient_data(&self, needed: usize, got: usize) {
        self.push(Emission::InsufficientData { needed, got });
    }

    fn values(&self, values: &[f64]) {
        self.push(Emission::Values(values.to_vec()));
    }

    fn state(&self, report: &StateReport) {
        self.push(Emission::State(*report));
    }

    fn configuration_error(&self, error: &ApenError) {
        self.push(Emission::ConfigurationError(error.clone()));
    }
}
