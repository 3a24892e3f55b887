//! # anofox-apen
//!
//! Streaming approximate entropy (ApEn) for scalar time series.
//!
//! Samples arrive one at a time and are kept in a bounded history; each new
//! sample can trigger a recomputation of ApEn over the retained window. The
//! pattern comparison runs on a snapshot, outside the history lock, so
//! ingestion and computation can happen on different threads.
//!
//! - [`features::entropy`] — the ApEn algorithm over plain slices
//! - [`core`] — the bounded [`Series`](core::Series) and [`EstimatorConfig`](core::EstimatorConfig)
//! - [`streaming`] — the thread-safe estimator and its output sinks

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod streaming;

pub use error::{ApenError, Result};

pub mod prelude {
    pub use crate::core::{EstimatorConfig, Series};
    pub use crate::error::{ApenError, Result};
    pub use crate::features::approximate_entropy;
    pub use crate::streaming::{
        ApproximateEntropyEstimator, CollectingSink, Emission, EntropySink, StateReport,
        TracingSink,
    };
}
