use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the scanner and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every logical line the scanner processes:
///   RUST_LOG=zonestream=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
