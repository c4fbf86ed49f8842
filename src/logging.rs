//! Console tracing setup for the harness binary.
//!
//! `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
//! verbose output was requested.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber. Fails if one is already installed.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
