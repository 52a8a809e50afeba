//! tracing subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise the level follows the CLI
//! verbosity. Logs go to stderr so stdout stays clean for `--json` output.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;
use crate::errors::{Result, SheraError};

pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| SheraError::Generic(format!("Failed to initialise logging: {}", e)))
}
