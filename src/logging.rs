//! Tracing subscriber setup.
//!
//! The library only emits events; binaries and tests that want to see them
//! call one of these initialisers once at startup. Verbosity follows
//! `RUST_LOG` and defaults to `info`.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a human-readable subscriber. Later calls are ignored.
pub fn init_tracing() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer().with_target(true).with_thread_ids(true);

        if tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            info!("anofox-apen tracing initialized");
        }
    });
}

/// Install a JSON subscriber for structured log collection. Later calls are ignored.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true);

        if tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            info!("anofox-apen tracing initialized (JSON mode)");
        }
    });
}
