//! Tracing setup for the `outfit` binary.
//!
//! `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug`
//! with `--debug`. Logs go to stderr so rendered markup on stdout stays
//! clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
