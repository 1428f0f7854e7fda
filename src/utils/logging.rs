// Logging setup for the hook binary

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is not set; keeps successful hook runs silent
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr tracing subscriber.
///
/// Calling this more than once is harmless; later calls keep the first
/// subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
