//! Command implementations and argument parsing for the roadnet CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use roadnet_core::{Algorithm, MstError, MstErrorCode, NetworkSolution, solve_batch_with_ids};
use thiserror::Error;
use tracing::{Span, error, field, info, instrument};

use super::input::InputDocument;
use super::report::SolveReport;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "roadnet",
    about = "Compute minimum spanning trees of city road networks."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve every network in a JSON input document.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to the JSON input document.
    pub input: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Engines to include in the report.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,
}

/// Engine selection for the report.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Report Prim and Kruskal.
    #[default]
    Both,
    /// Report Kruskal only.
    Kruskal,
    /// Report Prim only.
    Prim,
}

impl AlgorithmChoice {
    /// Returns the engines included in the report, Prim first.
    #[must_use]
    pub const fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Both => &Algorithm::ALL,
            Self::Kruskal => &[Algorithm::Kruskal],
            Self::Prim => &[Algorithm::Prim],
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading input or writing the report.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input document is not valid JSON or does not match the schema.
    #[error("failed to decode `{path}`: {source}")]
    Decode {
        /// Path of the input document.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The report could not be encoded or written.
    #[error("failed to encode report: {0}")]
    Encode(#[source] serde_json::Error),
    /// A network could not be solved.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable core error code when the failure came from the
    /// solver.
    #[must_use]
    pub fn core_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Core(core) => Some(core.code()),
            _ => None,
        }
    }
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Report to emit.
    pub report: SolveReport,
    /// Destination file, or `None` for stdout.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or decoded, or when
/// any network fails to solve.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadnet_cli::cli::{AlgorithmChoice, Cli, Command, SolveCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"graphs": [{"nodes": ["A", "B"], "edges": [{"from": "B", "to": "A", "weight": 3}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///         algorithm: AlgorithmChoice::Both,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let graph = &summary.report.results[0];
/// assert_eq!(graph.graph_id, 1);
/// assert_eq!(graph.kruskal.as_ref().map(|run| run.total_cost), Some(3));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            run_solve(solve)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(input = field::Empty, algorithm = command.algorithm.as_str(), graphs = field::Empty),
)]
pub(super) fn run_solve(command: SolveCommand) -> Result<ExecutionSummary, CliError> {
    let SolveCommand {
        input,
        output,
        algorithm,
    } = command;
    let span = Span::current();
    span.record("input", field::display(input.display()));

    let document = read_input(&input)?;
    let batch = document.into_batch();
    span.record("graphs", batch.len());

    let solutions = collect_solutions(&batch)?;
    info!(
        graphs = solutions.len(),
        districts = batch.iter().map(|(_, network)| network.district_count()).sum::<usize>(),
        "solve completed"
    );
    Ok(ExecutionSummary {
        report: SolveReport::new(&solutions, algorithm.algorithms()),
        output,
    })
}

fn collect_solutions(
    batch: &[(u64, roadnet_core::Network)],
) -> Result<Vec<NetworkSolution>, CliError> {
    let mut solutions = Vec::with_capacity(batch.len());
    let mut first_error = None;
    for (outcome, (graph_id, _)) in solve_batch_with_ids(batch).into_iter().zip(batch) {
        match outcome {
            Ok(solution) => solutions.push(solution),
            Err(err) => {
                error!(graph_id, code = err.code().as_str(), "network could not be solved");
                first_error.get_or_insert(err);
            }
        }
    }
    first_error.map_or_else(|| Ok(solutions), |err| Err(CliError::from(err)))
}

#[instrument(name = "cli.read_input", err, fields(path = field::Empty))]
pub(super) fn read_input(path: &Path) -> Result<InputDocument, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    InputDocument::from_reader(BufReader::new(file)).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the summary's report to its output file, or to stdout.
///
/// # Errors
/// Returns [`CliError::Io`] when the output file cannot be created and
/// [`CliError::Encode`] when writing fails.
pub fn write_summary(summary: &ExecutionSummary) -> Result<(), CliError> {
    match &summary.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            render_report(&summary.report, BufWriter::new(file))?;
            info!(path = %path.display(), "report written");
            Ok(())
        }
        None => render_report(&summary.report, io::stdout().lock()),
    }
}

/// Renders `report` to `writer` as pretty-printed JSON followed by a
/// newline, then flushes the writer.
///
/// # Errors
/// Returns [`CliError::Encode`] if encoding or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadnet_cli::cli::{SolveReport, render_report};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = SolveReport { results: Vec::new() };
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "{\n  \"results\": []\n}\n");
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &SolveReport, mut writer: impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(CliError::Encode)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::Encode(serde_json::Error::io(source)))
}
