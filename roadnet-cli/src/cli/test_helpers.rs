//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write temporary input documents and assert error
//! handling. These helpers keep the cases concise.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{AlgorithmChoice, Cli, CliError, Command, ExecutionSummary, SolveCommand, run_cli};

pub(super) const TRIANGLE: &str = r#"{
  "graphs": [
    {
      "id": 1,
      "nodes": ["A", "B", "C"],
      "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "A", "to": "C", "weight": 3}
      ]
    }
  ]
}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn solve_cli(input: PathBuf, algorithm: AlgorithmChoice) -> Cli {
    Cli {
        command: Command::Solve(SolveCommand {
            input,
            output: None,
            algorithm,
        }),
    }
}

pub(super) fn solve_contents(contents: &str, algorithm: AlgorithmChoice) -> Result<ExecutionSummary, CliError> {
    let dir = temp_dir();
    let path = match write_input(&dir, "input.json", contents) {
        Ok(path) => path,
        Err(err) => panic!("failed to write input: {err}"),
    };
    run_cli(solve_cli(path, algorithm))
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
