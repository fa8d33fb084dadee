//! Shared test support: logging init and unique fixtures.

#![allow(dead_code)]

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Idempotent logging init for integration tests. Level precedence:
/// `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

#[ctor::ctor]
fn init() {
    init_logging();
}

pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4().simple())
}
