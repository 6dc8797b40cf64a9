//! Logging setup
//!
//! Installs the process-wide `tracing` subscriber. `RUST_LOG` takes
//! precedence over `logging.level`.

use fleetbook_domain::{FleetbookError, LoggingConfig, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`.
///
/// # Errors
/// Returns `FleetbookError::Config` for an unparseable filter directive and
/// `FleetbookError::Internal` if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json().with_target(true)).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_file(true).with_line_number(true))
            .try_init()
    };

    installed.map_err(|e| FleetbookError::Internal(format!("tracing already initialized: {e}")))
}

/// Filter from `RUST_LOG` when set, otherwise from `level`.
fn env_filter(level: &str) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => parse_filter(&directives),
        _ => parse_filter(level),
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| FleetbookError::Config(format!("invalid log filter '{directives}': {e}")))
}
