//! Property-based tests for the bounded history and the estimator.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated sample streams.

use anofox_apen::core::Series;
use anofox_apen::features::{approximate_entropy, correlation_integral};
use anofox_apen::streaming::ApproximateEntropyEstimator;
use anofox_apen::ApenError;
use proptest::prelude::*;

/// Strategy for generating finite sample streams.
fn values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, min_len..max_len)
}

// =============================================================================
// Property: Bounded growth and eviction order
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn series_keeps_last_min_n_c(
        values in values_strategy(0, 200),
        capacity in 1usize..64
    ) {
        let mut series = Series::with_capacity(capacity);
        for &v in &values {
            series.append(v);
        }

        let kept = values.len().min(capacity);
        prop_assert_eq!(series.len(), kept);
        prop_assert_eq!(series.snapshot(), values[values.len() - kept..].to_vec());
    }

    #[test]
    fn full_series_evicts_exactly_the_oldest(
        values in values_strategy(1, 40),
        next in -1000.0..1000.0_f64
    ) {
        let mut series = Series::with_capacity(values.len());
        for &v in &values {
            series.append(v);
        }

        let evicted = series.append(next);
        prop_assert_eq!(evicted, Some(values[0]));

        let mut expected = values[1..].to_vec();
        expected.push(next);
        prop_assert_eq!(series.snapshot(), expected);
    }

    #[test]
    fn estimator_history_is_bounded(
        values in values_strategy(0, 150),
        capacity in 8usize..60
    ) {
        let estimator = ApproximateEntropyEstimator::builder()
            .capacity(capacity)
            .pattern_length(3)
            .auto_recompute(false)
            .build()
            .unwrap();
        for &v in &values {
            estimator.ingest(v).unwrap();
        }

        let kept = values.len().min(capacity);
        prop_assert_eq!(estimator.len(), kept);
        prop_assert_eq!(estimator.snapshot(), values[values.len() - kept..].to_vec());
    }
}

// =============================================================================
// Property: Results are finite or InsufficientData, never anything else
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn apen_is_finite_or_insufficient(
        values in values_strategy(0, 60),
        m in 2usize..5,
        r in 0.01..500.0_f64
    ) {
        match approximate_entropy(&values, m, r) {
            Ok(value) => {
                prop_assert!(values.len() >= 2 * m);
                prop_assert!(value.is_finite(), "non-finite ApEn: {}", value);
            }
            Err(ApenError::InsufficientData { needed, got }) => {
                prop_assert_eq!(needed, 2 * m);
                prop_assert_eq!(got, values.len());
                prop_assert!(got < needed);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn correlation_integral_is_a_fraction(
        values in values_strategy(4, 60),
        m in 1usize..4,
        r in 0.01..500.0_f64
    ) {
        let c = correlation_integral(&values, m, r);
        let n = (values.len() - m + 1) as f64;
        // Self-matches put a floor of 1/n under every pattern's fraction.
        prop_assert!(c >= 1.0 / n - 1e-12);
        prop_assert!(c <= 1.0 + 1e-12);
    }

    #[test]
    fn constant_series_has_zero_entropy(
        level in -1000.0..1000.0_f64,
        len in 4usize..60,
        r in 1e-6..10.0_f64
    ) {
        let values = vec![level; len];
        let apen = approximate_entropy(&values, 2, r).unwrap();
        prop_assert!(apen.abs() < 1e-12);
    }
}

// =============================================================================
// Property: Rejected configuration leaves state unchanged
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn oversized_pattern_length_is_rejected(
        capacity in 8usize..100,
        extra in 1usize..20
    ) {
        let estimator = ApproximateEntropyEstimator::builder()
            .capacity(capacity)
            .pattern_length(2)
            .build()
            .unwrap();
        let too_long = capacity / 2 - 1 + extra;

        prop_assert!(estimator.set_pattern_length(too_long).is_err());
        prop_assert_eq!(estimator.pattern_length(), 2);
    }

    #[test]
    fn undersized_capacity_is_rejected(
        m in 2usize..10,
        shortfall in 0usize..4
    ) {
        let estimator = ApproximateEntropyEstimator::builder()
            .capacity(64)
            .pattern_length(m)
            .build()
            .unwrap();
        let too_small = (2 * m).saturating_sub(shortfall);

        prop_assert!(estimator.set_capacity(too_small).is_err());
        prop_assert_eq!(estimator.capacity(), 64);
    }
}
