pub mod multicall;
pub mod provider;

pub use vsl_constants::test_utils as test_constants;

/// Install a test-friendly `tracing` subscriber, filtered by `RUST_LOG`.
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
