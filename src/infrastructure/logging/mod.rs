// Logging module - Logging infrastructure
use crate::domain::error::{StabTermError, StabTermResult};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// Diagnostics go to stderr so they never interleave with the operator
/// menu and protocol output on stdout. `RUST_LOG` overrides the configured
/// level; `verbose` forces debug.
pub fn init_logging(default_level: &str, verbose: bool) -> StabTermResult<()> {
    let fallback = if verbose {
        "stabterm=debug".to_string()
    } else {
        format!("stabterm={default_level}")
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| StabTermError::Config {
            message: format!("Failed to initialize logging: {e}"),
        })
}
