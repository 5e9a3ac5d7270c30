//! CLI for nench-report.
//!
//! This crate provides the `nench-report` command: `parse` turns nench
//! reports into JSON, `check` tells which report sections were found.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nench_benchmarks::{io, BenchmarkResult};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// nench-report CLI.
#[derive(Parser, Debug)]
#[command(name = "nench-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log output format.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "text",
        env = "NENCH_REPORT_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract metrics from nench reports and emit them as JSON.
    ///
    /// Each report is printed as one JSON document on stdout unless
    /// --output is given. Use `-` to read a report from stdin.
    Parse {
        /// Report files to parse.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write all results to this file as a pretty-printed JSON array
        /// instead of stdout.
        #[arg(short, long, env = "NENCH_REPORT_OUTPUT")]
        output: Option<PathBuf>,

        /// Also write one JSON file per report into this directory.
        #[arg(long, env = "NENCH_REPORT_RAW_DIR")]
        raw_dir: Option<PathBuf>,

        /// Pretty-print JSON on stdout.
        #[arg(short, long, conflicts_with = "output")]
        pretty: bool,

        /// Print only the extracted metrics, without the envelope.
        #[arg(long, conflicts_with = "output")]
        metrics_only: bool,
    },

    /// Report which sections each report contains.
    ///
    /// Exits non-zero if any report is incomplete or cannot be parsed.
    Check {
        /// Report files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Install the tracing subscriber. Logs go to stderr.
///
/// `RUST_LOG` overrides the level chosen by `verbose` and `quiet`.
pub fn init_logging(verbose: u8, quiet: bool, format: LogFormat) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut out)
}

/// Execute a command, writing user-facing output to `out`.
pub fn execute(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Parse {
            files,
            output,
            raw_dir,
            pretty,
            metrics_only,
        } => {
            let results = nench_benchmarks::parse_files(&files)?;

            if let Some(dir) = &raw_dir {
                for path in io::write_raw_results(&results, dir)? {
                    info!(path = %path.display(), "wrote raw result");
                }
            }

            match &output {
                Some(path) => {
                    io::write_results_json(&results, path)?;
                    info!(
                        path = %path.display(),
                        count = results.len(),
                        "wrote results"
                    );
                }
                None => {
                    for result in &results {
                        let line = if metrics_only {
                            render(&result.metrics, pretty)?
                        } else {
                            render(result, pretty)?
                        };
                        writeln!(out, "{line}").context("failed to write to stdout")?;
                    }
                }
            }

            Ok(())
        }
        Commands::Check { files } => {
            let mut failed = 0;
            for file in &files {
                match nench_benchmarks::parse_file(file) {
                    Ok(result) => {
                        if !result.is_complete() {
                            failed += 1;
                        }
                        writeln!(out, "{}", describe(&result))?;
                    }
                    Err(e) => {
                        failed += 1;
                        writeln!(out, "{}: error: {}", file.display(), e)?;
                    }
                }
            }

            if failed > 0 {
                bail!("{} of {} reports incomplete or invalid", failed, files.len());
            }
            Ok(())
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn describe(result: &BenchmarkResult) -> String {
    let missing = result.sections.incomplete();
    if missing.is_empty() {
        format!("{}: complete", result.target_id)
    } else {
        format!("{}: missing {}", result.target_id, missing.join(", "))
    }
}
