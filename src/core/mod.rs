//! Core data structures for streaming entropy estimation.

mod config;
mod series;

pub use config::{
    clamp_flag, EstimatorConfig, EstimatorConfigBuilder, DEFAULT_CAPACITY,
    DEFAULT_PATTERN_LENGTH, DEFAULT_SIMILARITY_RADIUS,
};
pub use series::Series;
