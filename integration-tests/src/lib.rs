//! Shared fixtures for the integration tests.

mod table_kernel;

pub use table_kernel::TableKernel;

/// Installs a log subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fluidbc=debug")),
        )
        .with_test_writer()
        .try_init();
}
