use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the diagnostic subscriber. Output goes to stderr so stdout only
/// carries the report; `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
