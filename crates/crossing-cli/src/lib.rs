//! Command-line runner for the river-crossing scheduler.
//!
//! Reads a puzzle configuration, runs the exhaustive search and writes the
//! sorted report as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use crossing_config::{ConfigError, CrossingConfig, DEFAULT_CONFIG_PATH, DEFAULT_SOLUTION_PATH};
use crossing_core::CrossingError;
use crossing_solver::{CrossingReport, Solver};
use thiserror::Error;
use tracing::info;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Crossing(#[from] CrossingError),

    #[error("cannot write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Enumerate every schedule for moving a group of horses across a river.
#[derive(Debug, Clone, Parser)]
#[command(name = "crossing", version, about)]
pub struct Args {
    /// Puzzle configuration (JSON, TOML or YAML by extension)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Where to write the JSON report
    #[arg(short, long, default_value = DEFAULT_SOLUTION_PATH)]
    pub output: PathBuf,

    /// Indent the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Disable console logging
    #[arg(short, long)]
    pub quiet: bool,
}

/// Loads the configuration, solves it and writes the report.
pub fn run(args: &Args) -> Result<CrossingReport, CliError> {
    let config = CrossingConfig::load(&args.config)?;
    let solver = Solver::new(&config)?;
    let outcome = solver.solve();

    write_report(&outcome.report, &args.output, args.pretty)?;
    info!(
        "Wrote {} solutions to {}",
        outcome.report.num_of_solutions,
        args.output.display()
    );
    Ok(outcome.report)
}

/// Writes `report` as JSON to `path`.
pub fn write_report(report: &CrossingReport, path: &Path, pretty: bool) -> Result<(), CliError> {
    let output_error = |source| CliError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer.flush().map_err(output_error)
}
