//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so exports written to stdout stay clean. The
//! default level is `warn` for this crate and can be raised with `RUST_LOG`.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "habit_tracker=warn";

static INIT: Once = Once::new();

/// Install the global tracing subscriber; later calls do nothing
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
