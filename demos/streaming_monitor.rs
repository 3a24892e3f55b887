//! Streaming regularity monitor.
//!
//! Feeds a signal that drifts from a clean sine into noise and prints the
//! approximate entropy of the most recent window as it changes.
//!
//! Run with: cargo run --example streaming_monitor
//! Set RUST_LOG=debug to see every computation.

use std::sync::Arc;

use anofox_apen::logging::init_tracing;
use anofox_apen::streaming::{ApproximateEntropyEstimator, CollectingSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    init_tracing();

    println!("=== Streaming Approximate Entropy ===\n");

    let sink = Arc::new(CollectingSink::new());
    let estimator = ApproximateEntropyEstimator::builder()
        .capacity(60)
        .pattern_length(2)
        .similarity_radius(0.2)
        .warn_on_insufficient_data(false)
        .sink(Arc::clone(&sink))
        .build()
        .expect("valid configuration");

    let mut rng = StdRng::seed_from_u64(3);
    let n = 300;

    for i in 0..n {
        // Noise weight ramps from 0 to 1 over the stream.
        let mix = i as f64 / n as f64;
        let clean = (i as f64 * 0.3).sin();
        let noise: f64 = rng.gen_range(-1.0..1.0);
        let sample = (1.0 - mix) * clean + mix * noise;

        if let Ok(Some(apen)) = estimator.ingest(sample) {
            if i % 30 == 0 {
                println!("sample {:>4}  noise {:>4.0}%  ApEn {:.4}", i, mix * 100.0, apen);
            }
        }
    }

    println!("\n--- State ---");
    println!("{}", estimator.state());

    println!("\n--- Widening the radius ---");
    for r in [0.1, 0.2, 0.5, 1.0] {
        estimator
            .set_similarity_radius(r)
            .expect("positive radius");
        if let Ok(apen) = estimator.compute() {
            println!("r = {:.1}  ApEn {:.4}", r, apen);
        }
    }

    println!("\n{} values emitted in total", sink.entropies().len());
}
