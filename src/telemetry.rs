//! Logging setup for the native library.
//!
//! The host gives native code no console of its own; log output goes through
//! `tracing` and is filtered via the `RUST_LOG` environment variable.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// Called from `JNI_OnLoad`; safe to call more than once. If the host process
/// already installed a subscriber, that one is kept.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
