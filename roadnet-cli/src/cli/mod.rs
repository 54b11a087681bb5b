//! Command-line interface orchestration for the roadnet solver.
//!
//! The CLI offers a single `solve` command that reads a JSON batch of city
//! networks, solves each one with both MST engines, and emits a JSON report.

mod commands;
mod input;
mod report;

pub use commands::{
    AlgorithmChoice, Cli, CliError, Command, ExecutionSummary, SolveCommand, render_report,
    run_cli, write_summary,
};
pub use input::{InputDocument, InputEdge, InputGraph};
pub use report::{AlgorithmReport, EdgeReport, GraphReport, InputStats, SolveReport};

#[cfg(test)]
mod test_helpers;
