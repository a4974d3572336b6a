//! Logging initialisation.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Default filter directives for a verbosity count and deployment mode.
///
/// `-v` is info, `-vv` debug and `-vvv` trace. Without `-v`, development logs
/// requests at info and production only warnings.
pub fn default_directives(verbose: u8, environment: Environment) -> &'static str {
    match (verbose, environment) {
        (0, Environment::Development) => "info",
        (0, Environment::Production) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: u8, environment: Environment) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, environment)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
