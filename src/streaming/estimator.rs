//! Streaming approximate entropy estimator.
//!
//! Samples arrive one at a time through [`ApproximateEntropyEstimator::ingest`]
//! and are kept in a bounded [`Series`]. The history and the configuration sit
//! behind a single mutex that is only held to copy data in or out; the
//! quadratic pattern comparison always runs on a snapshot with the lock
//! released, so ingestion is never stalled by a computation.

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::sink::{EntropySink, TracingSink};
use super::state::StateReport;
use crate::core::{clamp_flag, EstimatorConfig, EstimatorConfigBuilder, Series};
use crate::error::{ApenError, Result};
use crate::features::entropy::approximate_entropy;

#[derive(Debug)]
struct History {
    series: Series,
    config: EstimatorConfig,
}

/// Approximate entropy over the most recent samples of a stream.
///
/// All methods take `&self`; share the estimator between threads with an
/// `Arc`. Results and diagnostics go to the [`EntropySink`] given at
/// construction (a [`TracingSink`] by default) and are also returned to the
/// caller.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use anofox_apen::streaming::{ApproximateEntropyEstimator, CollectingSink};
///
/// let sink = Arc::new(CollectingSink::new());
/// let estimator = ApproximateEntropyEstimator::builder()
///     .capacity(20)
///     .pattern_length(2)
///     .similarity_radius(0.5)
///     .sink(Arc::clone(&sink))
///     .build()
///     .unwrap();
///
/// for i in 0..10 {
///     estimator.ingest((i % 2) as f64).unwrap();
/// }
/// assert_eq!(estimator.len(), 10);
/// assert!(!sink.entropies().is_empty());
/// ```
pub struct ApproximateEntropyEstimator {
    history: Mutex<History>,
    sink: Box<dyn EntropySink>,
}

/// Builder for ApproximateEntropyEstimator.
#[derive(Default)]
pub struct EstimatorBuilder {
    config: EstimatorConfigBuilder,
    sink: Option<Box<dyn EntropySink>>,
}

impl EstimatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of retained samples.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.capacity(capacity);
        self
    }

    /// Pattern length `m`.
    pub fn pattern_length(mut self, pattern_length: usize) -> Self {
        self.config = self.config.pattern_length(pattern_length);
        self
    }

    /// Similarity radius `r`.
    pub fn similarity_radius(mut self, radius: f64) -> Self {
        self.config = self.config.similarity_radius(radius);
        self
    }

    pub fn auto_recompute(mut self, enabled: bool) -> Self {
        self.config = self.config.auto_recompute(enabled);
        self
    }

    pub fn warn_on_insufficient_data(mut self, enabled: bool) -> Self {
        self.config = self.config.warn_on_insufficient_data(enabled);
        self
    }

    /// Where results and diagnostics are sent.
    pub fn sink<S: EntropySink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<ApproximateEntropyEstimator> {
        let config = self.config.build()?;
        let sink = self.sink.unwrap_or_else(|| Box::new(TracingSink));
        Ok(ApproximateEntropyEstimator::from_parts(config, sink))
    }
}

impl ApproximateEntropyEstimator {
    /// Create an estimator with default settings reporting through tracing.
    pub fn new() -> Self {
        Self::from_parts(EstimatorConfig::default(), Box::new(TracingSink))
    }

    /// Create an estimator with default settings and the given sink.
    pub fn with_sink<S: EntropySink + 'static>(sink: S) -> Self {
        Self::from_parts(EstimatorConfig::default(), Box::new(sink))
    }

    /// Create an estimator from an already validated configuration.
    pub fn with_config<S: EntropySink + 'static>(config: EstimatorConfig, sink: S) -> Self {
        Self::from_parts(config, Box::new(sink))
    }

    /// Create a builder for more complex configuration.
    pub fn builder() -> EstimatorBuilder {
        EstimatorBuilder::new()
    }

    fn from_parts(config: EstimatorConfig, sink: Box<dyn EntropySink>) -> Self {
        Self {
            history: Mutex::new(History {
                series: Series::with_capacity(config.capacity()),
                config,
            }),
            sink,
        }
    }

    // ==================== input ====================

    /// Append a sample, then recompute if auto-recompute is enabled.
    ///
    /// Returns the recomputed value, or `None` when no recomputation ran or
    /// there was not enough data yet. Non-finite samples are rejected and
    /// leave the history untouched.
    pub fn ingest(&self, value: f64) -> Result<Option<f64>> {
        if !value.is_finite() {
            let err = ApenError::InvalidSample(value);
            self.report_rejection(&err);
            return Err(err);
        }

        let auto_recompute = {
            let mut history = self.history.lock();
            history.series.append(value);
            history.config.auto_recompute()
        };

        if auto_recompute {
            Ok(self.compute().ok())
        } else {
            Ok(None)
        }
    }

    /// Integer input, coerced to a float sample.
    pub fn ingest_int(&self, value: i64) -> Result<Option<f64>> {
        self.ingest(value as f64)
    }

    /// Drop every retained sample. Settings are unchanged.
    pub fn clear(&self) {
        self.history.lock().series.clear();
    }

    // ==================== computation ====================

    /// Compute approximate entropy over the current history and emit it.
    ///
    /// When the history is shorter than `2 * pattern_length`, nothing is
    /// emitted except an insufficient-data diagnostic, and only if warnings
    /// are enabled.
    pub fn compute(&self) -> Result<f64> {
        let (samples, config) = self.snapshot_with_config();

        match run(&samples, &config) {
            Ok(value) => {
                debug!(
                    apen = value,
                    length = samples.len(),
                    pattern_length = config.pattern_length(),
                    "computed approximate entropy"
                );
                self.sink.entropy(value);
                Ok(value)
            }
            Err(ApenError::InsufficientData { needed, got }) => {
                if config.warn_on_insufficient_data() {
                    debug!(
                        needed,
                        got, "not enough data to calculate approximate entropy"
                    );
                    self.sink.insufficient_data(needed, got);
                }
                Err(ApenError::InsufficientData { needed, got })
            }
            Err(err) => Err(err),
        }
    }

    /// Same computation as [`compute`](Self::compute) without emitting anything.
    pub fn estimate(&self) -> Result<f64> {
        let (samples, config) = self.snapshot_with_config();
        run(&samples, &config)
    }

    // ==================== inspection ====================

    /// Emit the retained samples, oldest first.
    ///
    /// Best effort: if the history is locked by another caller the dump is
    /// skipped and `None` is returned. An empty history returns an empty
    /// listing but emits nothing.
    pub fn dump(&self) -> Option<Vec<f64>> {
        let values = match self.history.try_lock() {
            Some(history) => history.series.snapshot(),
            None => {
                trace!("history busy, dump skipped");
                return None;
            }
        };

        if !values.is_empty() {
            self.sink.values(&values);
        }
        Some(values)
    }

    /// Emit a [`StateReport`], followed by a best-effort [`dump`](Self::dump).
    pub fn get_state(&self) -> StateReport {
        let report = self.state();
        self.sink.state(&report);
        self.dump();
        report
    }

    /// Current settings and occupancy without emitting anything.
    pub fn state(&self) -> StateReport {
        let history = self.history.lock();
        StateReport::new(&history.config, history.series.len())
    }

    /// Copy of the retained samples, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.history.lock().series.snapshot()
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> EstimatorConfig {
        self.history.lock().config
    }

    pub fn len(&self) -> usize {
        self.history.lock().series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.lock().series.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.history.lock().config.capacity()
    }

    pub fn pattern_length(&self) -> usize {
        self.history.lock().config.pattern_length()
    }

    pub fn similarity_radius(&self) -> f64 {
        self.history.lock().config.similarity_radius()
    }

    pub fn auto_recompute(&self) -> bool {
        self.history.lock().config.auto_recompute()
    }

    pub fn warn_on_insufficient_data(&self) -> bool {
        self.history.lock().config.warn_on_insufficient_data()
    }

    // ==================== configuration ====================

    /// Change the history capacity, keeping the most recent samples.
    ///
    /// Rejected unless `capacity >= 2 * pattern_length + 2` and it differs
    /// from the current capacity.
    pub fn set_capacity(&self, capacity: usize) -> Result<()> {
        let result = {
            let mut guard = self.history.lock();
            let history = &mut *guard;
            let mut config = history.config;
            let result = config.set_capacity(capacity);
            if result.is_ok() {
                history.series.resize(capacity);
                history.config = config;
                debug!(capacity, length = history.series.len(), "history resized");
            }
            result
        };
        self.settle(result)
    }

    /// Change the pattern length; must be in `2..=capacity / 2 - 1`.
    pub fn set_pattern_length(&self, pattern_length: usize) -> Result<()> {
        let result = self.history.lock().config.set_pattern_length(pattern_length);
        self.settle(result)
    }

    /// Change the similarity radius; must be finite and > 0.0.
    pub fn set_similarity_radius(&self, radius: f64) -> Result<()> {
        let result = self.history.lock().config.set_similarity_radius(radius);
        self.settle(result)
    }

    pub fn set_auto_recompute(&self, enabled: bool) {
        self.history.lock().config.set_auto_recompute(enabled);
    }

    /// Integer form of [`set_auto_recompute`](Self::set_auto_recompute);
    /// values are clamped into `{0, 1}`.
    pub fn set_auto_recompute_flag(&self, flag: i64) {
        self.set_auto_recompute(clamp_flag(flag));
    }

    pub fn set_warn_on_insufficient_data(&self, enabled: bool) {
        self.history
            .lock()
            .config
            .set_warn_on_insufficient_data(enabled);
    }

    /// Integer form of
    /// [`set_warn_on_insufficient_data`](Self::set_warn_on_insufficient_data);
    /// values are clamped into `{0, 1}`.
    pub fn set_warn_flag(&self, flag: i64) {
        self.set_warn_on_insufficient_data(clamp_flag(flag));
    }

    // ==================== helpers ====================

    fn snapshot_with_config(&self) -> (Vec<f64>, EstimatorConfig) {
        let history = self.history.lock();
        (history.series.snapshot(), history.config)
    }

    fn settle(&self, result: Result<()>) -> Result<()> {
        if let Err(err) = &result {
            self.report_rejection(err);
        }
        result
    }

    fn report_rejection(&self, err: &ApenError) {
        debug!(error = %err, "rejected");
        self.sink.configuration_error(err);
    }
}

fn run(samples: &[f64], config: &EstimatorConfig) -> Result<f64> {
    approximate_entropy(
        samples,
        config.pattern_length(),
        config.similarity_radius(),
    )
}

impl Default for ApproximateEntropyEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApproximateEntropyEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApproximateEntropyEstimator")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
