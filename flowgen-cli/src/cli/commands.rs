//! Argument parsing and command execution for the flowgen CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use flowgen_core::{FlowInstance, GeneratorBuilder, GeneratorError, write_instance};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Positional arguments accepted by `flowgen`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "flowgen",
    about = "Generate a random max-flow instance over a seeded DAG."
)]
pub struct Cli {
    /// Number of vertices `n`; vertex 1 is the source and vertex `n` the sink.
    #[arg(value_name = "VERTICES", value_parser = clap::value_parser!(usize))]
    pub vertex_count: usize,

    /// Probability `p` in `[0, 1]` that each forward arc `(i, j)` is present.
    #[arg(value_name = "PROBABILITY", value_parser = clap::value_parser!(f64))]
    pub arc_probability: f64,

    /// Upper bound `r` for arc capacities, drawn uniformly from `[1, r]`.
    #[arg(value_name = "MAX_CAPACITY", value_parser = clap::value_parser!(u64))]
    pub max_capacity: u64,

    /// Seed for the pseudo-random generator.
    #[arg(value_name = "SEED", value_parser = clap::value_parser!(u64))]
    pub seed: u64,

    /// File to create or truncate with the generated instance.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameters were rejected before generation started.
    #[error(transparent)]
    Core(#[from] GeneratorError),
    /// Creating or writing the output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Output path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// File the instance was written to.
    pub output: PathBuf,
    /// Number of vertices requested.
    pub vertex_count: usize,
    /// Arcs written; zero for an infeasible instance.
    pub arc_count: usize,
    /// Whether the sink was reachable from the source.
    pub feasible: bool,
}

/// Validates the arguments, generates an instance and writes it to
/// `cli.output`.
///
/// Parameters are checked before the output file is touched, so a rejected
/// invocation leaves the file system unchanged.
///
/// # Errors
/// Returns [`CliError::Core`] for invalid parameters and [`CliError::Io`] when
/// the output file cannot be created or written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use flowgen_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("instance.txt");
/// let cli = Cli {
///     vertex_count: 3,
///     arc_probability: 1.0,
///     max_capacity: 5,
///     seed: 42,
///     output: output.clone(),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.feasible);
/// assert!(std::fs::read_to_string(output)?.starts_with("3 3\n"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.execute",
    err,
    skip(cli),
    fields(output = %cli.output.display(), feasible = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    let generator = GeneratorBuilder::new()
        .with_vertex_count(cli.vertex_count)
        .with_arc_probability(cli.arc_probability)
        .with_max_capacity(cli.max_capacity)
        .with_seed(cli.seed)
        .build()?;

    let instance = generator.generate();
    write_output(&instance, &cli.output)?;

    let summary = GenerationSummary {
        output: cli.output,
        vertex_count: cli.vertex_count,
        arc_count: instance.arc_count(),
        feasible: instance.is_feasible(),
    };
    Span::current().record("feasible", summary.feasible);
    info!(
        output = %summary.output.display(),
        arcs = summary.arc_count,
        "instance written"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.write_output",
    err,
    skip(instance),
    fields(path = %path.display()),
)]
pub(super) fn write_output(instance: &FlowInstance, path: &Path) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_instance(instance, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

/// Renders `summary` to `writer` as a short human-readable report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use flowgen_cli::cli::{GenerationSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = GenerationSummary {
///     output: "instance.txt".into(),
///     vertex_count: 2,
///     arc_count: 0,
///     feasible: false,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "output: instance.txt\nvertices: 2\nstatus: infeasible\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "output: {}", summary.output.display())?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    if summary.feasible {
        writeln!(writer, "arcs: {}", summary.arc_count)?;
        writeln!(writer, "status: feasible")
    } else {
        writeln!(writer, "status: infeasible")
    }
}
