//! Command-line interface for the flowgen instance generator.
//!
//! `flowgen VERTICES PROBABILITY MAX_CAPACITY SEED OUTPUT` validates its
//! arguments, generates one instance and writes it to `OUTPUT`.

mod commands;

pub use commands::{Cli, CliError, GenerationSummary, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
