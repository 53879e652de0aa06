//! Tracing subscriber wiring.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding process.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// multiple times; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize tracing with an explicit filter directive, ignoring the
/// environment. For tests and embedding applications that own their
/// filter policy.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    // Compact human-readable lines; the embedding app owns any JSON log
    // shipping layer it wants on top.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(true)
        .try_init();
}
