//! fibseq CLI - Binary entry point.
//!
//! Prints the opening terms of the Fibonacci sequence to stdout. Diagnostics go
//! to stderr through `tracing`, filtered by `RUST_LOG` or the `[log]` section of
//! `~/.fibseq/config.toml`.

use anyhow::{Error, Result};
use std::io::{BufWriter, stderr, stdout};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fibseq_config::{DEFAULT_LOG_FILTER, FibConfig};

fn init_tracing(default_filter: &str) {
    let mut rejected_filter = None;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|err| {
            rejected_filter = Some(err);
            EnvFilter::new(DEFAULT_LOG_FILTER)
        });

    // stdout carries the sequence; keep logs off it.
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(stderr))
        .with(env_filter)
        .init();

    if let Some(err) = rejected_filter {
        tracing::warn!(
            filter = default_filter,
            "Invalid log filter in config ({err}); using {DEFAULT_LOG_FILTER}"
        );
    }
}

fn load_config() -> (FibConfig, Option<String>) {
    match FibConfig::load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (FibConfig::default(), Some(format!("{:#}", Error::new(err)))),
    }
}

fn main() -> Result<()> {
    // Config is read before the subscriber exists so it can pick the filter;
    // any load failure is reported once logging is up.
    let (config, load_warning) = load_config();
    init_tracing(config.log_filter());

    if let Some(warning) = load_warning {
        tracing::warn!("{warning}; using defaults");
    }
    if let Some(path) = FibConfig::path() {
        tracing::debug!(path = %path.display(), "config path");
    }

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    fibseq::run(&config, &mut out)
}
