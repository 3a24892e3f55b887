//! Estimator configuration and its validation rules.

use crate::error::{ApenError, Result};

/// Default maximum number of retained samples.
pub const DEFAULT_CAPACITY: usize = 50;
/// Default pattern length `m`.
pub const DEFAULT_PATTERN_LENGTH: usize = 3;
/// Default similarity radius `r`.
pub const DEFAULT_SIMILARITY_RADIUS: f64 = 1.0;

/// Parameter set for approximate entropy estimation.
///
/// Fields are only reachable through validated setters, so a value of this
/// type always satisfies:
/// - `pattern_length > 1`
/// - `pattern_length <= capacity / 2 - 1`
/// - `similarity_radius > 0.0` and finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    capacity: usize,
    pattern_length: usize,
    similarity_radius: f64,
    auto_recompute: bool,
    warn_on_insufficient_data: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            pattern_length: DEFAULT_PATTERN_LENGTH,
            similarity_radius: DEFAULT_SIMILARITY_RADIUS,
            auto_recompute: true,
            warn_on_insufficient_data: true,
        }
    }
}

impl EstimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for more complex configuration.
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::new()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pattern length `m`.
    pub fn pattern_length(&self) -> usize {
        self.pattern_length
    }

    /// Similarity radius `r`.
    pub fn similarity_radius(&self) -> f64 {
        self.similarity_radius
    }

    /// Whether every append triggers a recomputation.
    pub fn auto_recompute(&self) -> bool {
        self.auto_recompute
    }

    /// Whether insufficient-data attempts are reported.
    pub fn warn_on_insufficient_data(&self) -> bool {
        self.warn_on_insufficient_data
    }

    /// Minimum number of samples needed before a value can be computed.
    pub fn required_samples(&self) -> usize {
        2 * self.pattern_length
    }

    /// Set the pattern length, rejecting values outside `2..=capacity/2 - 1`.
    pub fn set_pattern_length(&mut self, pattern_length: usize) -> Result<()> {
        validate_pattern_length(pattern_length, self.capacity)?;
        self.pattern_length = pattern_length;
        Ok(())
    }

    /// Set the capacity, rejecting values that leave no room for two patterns
    /// of length `m + 1`, and no-op changes.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        validate_capacity(capacity, self.pattern_length)?;
        if capacity == self.capacity {
            return Err(ApenError::InvalidParameter(format!(
                "capacity is already {}",
                capacity
            )));
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Set the similarity radius, rejecting non-positive or non-finite values.
    pub fn set_similarity_radius(&mut self, radius: f64) -> Result<()> {
        validate_similarity_radius(radius)?;
        self.similarity_radius = radius;
        Ok(())
    }

    pub fn set_auto_recompute(&mut self, enabled: bool) {
        self.auto_recompute = enabled;
    }

    pub fn set_warn_on_insufficient_data(&mut self, enabled: bool) {
        self.warn_on_insufficient_data = enabled;
    }
}

/// Builder for EstimatorConfig.
///
/// Values are validated together in [`build`](Self::build), so the order of
/// calls does not matter.
#[derive(Debug, Clone)]
pub struct EstimatorConfigBuilder {
    capacity: usize,
    pattern_length: usize,
    similarity_radius: f64,
    auto_recompute: bool,
    warn_on_insufficient_data: bool,
}

impl Default for EstimatorConfigBuilder {
    fn default() -> Self {
        let defaults = EstimatorConfig::default();
        Self {
            capacity: defaults.capacity,
            pattern_length: defaults.pattern_length,
            similarity_radius: defaults.similarity_radius,
            auto_recompute: defaults.auto_recompute,
            warn_on_insufficient_data: defaults.warn_on_insufficient_data,
        }
    }
}

impl EstimatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn pattern_length(mut self, pattern_length: usize) -> Self {
        self.pattern_length = pattern_length;
        self
    }

    pub fn similarity_radius(mut self, radius: f64) -> Self {
        self.similarity_radius = radius;
        self
    }

    pub fn auto_recompute(mut self, enabled: bool) -> Self {
        self.auto_recompute = enabled;
        self
    }

    pub fn warn_on_insufficient_data(mut self, enabled: bool) -> Self {
        self.warn_on_insufficient_data = enabled;
        self
    }

    pub fn build(self) -> Result<EstimatorConfig> {
        validate_capacity(self.capacity, self.pattern_length)?;
        validate_pattern_length(self.pattern_length, self.capacity)?;
        validate_similarity_radius(self.similarity_radius)?;

        Ok(EstimatorConfig {
            capacity: self.capacity,
            pattern_length: self.pattern_length,
            similarity_radius: self.similarity_radius,
            auto_recompute: self.auto_recompute,
            warn_on_insufficient_data: self.warn_on_insufficient_data,
        })
    }
}

/// Clamp an integer on/off flag into `{0, 1}` and return it as a bool.
pub fn clamp_flag(flag: i64) -> bool {
    flag.clamp(0, 1) == 1
}

fn validate_pattern_length(pattern_length: usize, capacity: usize) -> Result<()> {
    if pattern_length <= 1 {
        return Err(ApenError::InvalidParameter(
            "pattern_length must be an integer > 1".to_string(),
        ));
    }
    let max = (capacity / 2).saturating_sub(1);
    if pattern_length > max {
        return Err(ApenError::InvalidParameter(format!(
            "pattern_length must be <= {}",
            max
        )));
    }
    Ok(())
}

fn validate_capacity(capacity: usize, pattern_length: usize) -> Result<()> {
    let min = pattern_length
        .checked_mul(2)
        .and_then(|n| n.checked_add(2))
        .ok_or_else(|| {
            ApenError::InvalidParameter(format!(
                "pattern_length {} is too large",
                pattern_length
            ))
        })?;
    if capacity < min {
        return Err(ApenError::InvalidParameter(format!(
            "capacity too short, must be >= {}",
            min
        )));
    }
    Ok(())
}

fn validate_similarity_radius(radius: f64) -> Result<()> {
    if radius <= 0.0 || !radius.is_finite() {
        return Err(ApenError::InvalidParameter(format!(
            "similarity must be a finite value > 0.0, received {}",
            radius
        )));
    }
    Ok(())
}
