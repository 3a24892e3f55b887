//! Host-facing streaming estimator.
//!
//! Feeds samples into a bounded history and reports approximate entropy,
//! diagnostics, value dumps and state reports through an [`EntropySink`].
//!
//! # Example
//!
//! ```
//! use anofox_apen::streaming::ApproximateEntropyEstimator;
//!
//! let estimator = ApproximateEntropyEstimator::builder()
//!     .pattern_length(2)
//!     .similarity_radius(0.2)
//!     .auto_recompute(false)
//!     .build()
//!     .unwrap();
//!
//! for i in 0..30 {
//!     estimator.ingest((i as f64 * 0.5).sin()).unwrap();
//! }
//! let apen = estimator.compute().unwrap();
//! assert!(apen.is_finite());
//! ```

mod estimator;
mod sink;
mod state;

pub use estimator::{ApproximateEntropyEstimator, EstimatorBuilder};
pub use sink::{CollectingSink, Emission, EntropySink, TracingSink};
pub use state::StateReport;
