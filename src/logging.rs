use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber used by the binary.
/// - Respects `RUST_LOG` if set
/// - Falls back to `warn` so the demo's status lines stay readable
/// - Writes to stderr, leaving stdout to the status lines
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
