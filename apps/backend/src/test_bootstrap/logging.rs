//! Unified test logging initialization.
//!
//! One-time guard so unit tests can call this freely. Level precedence:
//! `TEST_LOG`, then `RUST_LOG`, then `"warn"`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        // try_init: never panic when another harness already installed a
        // subscriber.
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
