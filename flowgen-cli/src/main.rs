//! Entry point for the `flowgen` binary.
//!
//! Parses the five positional arguments with clap, writes the generated
//! instance to the requested file, and prints a short summary on `stdout`.
//! Failures are logged with their stable error code and exit non-zero.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use flowgen_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::init_logging,
};
use tracing::{error, field};

fn generate_and_report(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to generate instance")?;
    let mut stdout = io::stdout().lock();
    render_summary(&summary, &mut stdout).context("failed to print summary")?;
    stdout.flush().context("failed to flush stdout")
}

fn log_failure(err: &anyhow::Error) {
    let code = match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => Some(core.code().as_str()),
        Some(CliError::Io { .. }) | None => None,
    };
    error!(
        error = %format_args!("{err:#}"),
        code = code.map(field::display),
        "flowgen failed"
    );
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available until logging initialises"
)]
fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    match generate_and_report(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}
