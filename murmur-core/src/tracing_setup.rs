//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the murmur tracing/logging system.
///
/// Reads the `MURMUR_LOG` environment variable for per-module log levels.
/// Format: `MURMUR_LOG=murmur_consolidation=debug,murmur_clustering=info`
///
/// Falls back to `murmur=info` if `MURMUR_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    init_with_filter(|| {
        EnvFilter::try_from_env("MURMUR_LOG").unwrap_or_else(|_| EnvFilter::new("murmur=info"))
    });
}

/// Initialize tracing from the configured log level, still letting
/// `MURMUR_LOG` take precedence when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let level = config.log_level.clone();
    init_with_filter(move || {
        EnvFilter::try_from_env("MURMUR_LOG").unwrap_or_else(|_| EnvFilter::new(level))
    });
}

fn init_with_filter<F>(make_filter: F)
where
    F: FnOnce() -> EnvFilter,
{
    INIT.call_once(|| {
        // try_init: a host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(make_filter())
            .try_init();
    });
}
