//! Driver for the fibseq binary.
//!
//! ```text
//! main() -> init_tracing() -> FibConfig::load() -> run(config, stdout)
//!                                                     |
//!                                                     v
//!                                  Fibonacci::next_value() x terms -> one line each
//! ```

use anyhow::{Context, Result};
use std::io::Write;

use fibseq_config::FibConfig;
use fibseq_types::Fibonacci;

/// Write `config.terms()` values of the sequence to `out`, one per line.
///
/// The generator is built from `config.seed()`. Output is flushed before
/// returning.
pub fn run<W: Write>(config: &FibConfig, out: &mut W) -> Result<()> {
    let terms = config.terms();
    let mut fib = Fibonacci::from_seed(config.seed());

    for index in 0..terms {
        let value = fib
            .next_value()
            .with_context(|| format!("failed to produce term {index}"))?;
        tracing::debug!(index, value, "term");
        writeln!(out, "{value}").context("failed to write term")?;
    }
    out.flush().context("failed to flush output")?;

    tracing::info!(terms, "sequence complete");
    Ok(())
}
