//! CLI entry point for the roadnet MST solver.
//!
//! Parses command-line arguments with clap, solves every network in the input
//! document, writes the JSON report, and maps errors to exit codes. Logging is
//! initialised first so every later step can emit structured diagnostics.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use roadnet_cli::{
    cli::{Cli, CliError, run_cli, write_summary},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, and write the report.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    write_summary(&summary).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(CliError::core_code)
            .map(|code| field::display(code.as_str()));
        let message = format!("{err:#}");
        error!(error = %message, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
