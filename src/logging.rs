//! Tracing initialization.
//!
//! The host application usually installs its own subscriber; this helper
//! exists for standalone use (benches, examples, integration tests).

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize a compact stderr subscriber. Safe to call multiple times and
/// a no-op when the host already installed a global subscriber.
pub fn init() {
    INIT.call_once(|| {
        let under_test = std::env::var_os("NEXTEST").is_some()
            || std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
        let default_level = if under_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let filter = EnvFilter::from_default_env().add_directive(default_level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .compact();

        let result = if under_test {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = result {
            eprintln!("failed to initialize tracing: {}", e);
        }
    });
}
