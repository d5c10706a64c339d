//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Initialize the Taskmaster tracing/logging system.
///
/// Reads the `TASKMASTER_LOG` environment variable for per-target levels,
/// e.g. `TASKMASTER_LOG=taskmaster_prediction=debug`.
/// Falls back to `taskmaster=info` if unset or invalid.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("taskmaster=info"));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
/// Shares the `Once` guard with [`init_tracing`].
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // A host process may already own the global subscriber.
    if let Err(e) = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
    {
        tracing::debug!(error = %e, "global subscriber already installed, keeping it");
    }
}
