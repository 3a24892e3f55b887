//! Regularity features for scalar series.
//!
//! # Example
//!
//! ```
//! use anofox_apen::features::approximate_entropy;
//!
//! let series = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
//! let apen = approximate_entropy(&series, 2, 0.5).unwrap();
//! assert!(apen.is_finite());
//! ```

pub mod entropy;

pub use entropy::{
    approximate_entropy, bounded_distance, correlation_integral, entropy_ratio, DEGENERATE_FLOOR,
};
