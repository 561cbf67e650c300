//! Shared setup for the integration tests.

use tracing_subscriber::EnvFilter;

/// Routes `log` records to the test output. Filter with `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
