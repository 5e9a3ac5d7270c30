//! Report driver for nench-report.
//!
//! This crate sits between the filesystem and [`nench_extractor`]: it
//! loads nench reports, runs the extractor on each, and wraps the record
//! in a timestamped [`BenchmarkResult`] ready to be written as JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use nench_benchmarks::{parse_files, io};
//!
//! let results = parse_files(&["logs/2019-04-20-07_21_49.log"])?;
//! io::write_results_json(&results, "all_results.json")?;
//! # Ok::<(), nench_benchmarks::BenchmarkError>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - The `BenchmarkResult` envelope
//! - [`io`] - Reading reports and writing results
//! - [`error`] - Driver errors

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod io;
pub mod result;

pub use error::{BenchmarkError, Result};
pub use result::BenchmarkResult;

use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

/// Target name that reads the report from stdin.
pub const STDIN_TARGET: &str = "-";

/// Extract a report that is already in memory.
///
/// # Errors
///
/// Returns [`BenchmarkError::Extract`] if the extractor rejects the report.
pub fn parse_report(target_id: &str, content: &str) -> Result<BenchmarkResult> {
    let extraction =
        nench_extractor::scan(content).map_err(|source| BenchmarkError::Extract {
            target: target_id.to_string(),
            source,
        })?;

    let timestamp = result::report_timestamp(target_id, content).unwrap_or_else(|| {
        debug!(target_id, "no report timestamp found, using current time");
        Utc::now()
    });

    let result = BenchmarkResult::new(target_id, extraction, timestamp);
    info!(
        target_id,
        complete = result.is_complete(),
        missing = ?result.sections.incomplete(),
        "parsed report"
    );
    Ok(result)
}

/// Load and extract one report. `-` reads from stdin.
pub fn parse_file(path: impl AsRef<Path>) -> Result<BenchmarkResult> {
    let path = path.as_ref();
    let target_id = path.to_string_lossy();
    let content = if target_id == STDIN_TARGET {
        io::read_stdin()?
    } else {
        io::read_report(path)?
    };
    parse_report(&target_id, &content)
}

/// Load and extract several reports in order.
///
/// Stops at the first report that cannot be read or extracted.
pub fn parse_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<BenchmarkResult>> {
    paths.iter().map(parse_file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const REPORT: &str = "\
 benchmark timestamp:    2019-04-20 07:21:49 UTC
Frequency:    2799.998 MHz
    3.155 seconds
    5.239 seconds
    1.460 seconds
    min/avg/max/mdev = 95.2 us / 233.4 us / 8.94 ms / 179.1 us
    generated 3.29 k requests in 5.00 s, 823.2 MiB, 658 iops, 164.6 MiB/s
    average:    1112.62 MiB/s
";

    #[test]
    fn test_parse_report() {
        let result = parse_report("run.log", REPORT).unwrap();
        assert_eq!(result.target_id, "run.log");
        assert!(result.is_complete());
        assert_eq!(result.metrics.cpu.clock_frequency_mhz, Some(2799.998));
        assert_eq!(result.timestamp.to_rfc3339(), "2019-04-20T07:21:49+00:00");
    }

    #[test]
    fn test_parse_report_without_timestamp_uses_now() {
        let before = Utc::now();
        let result = parse_report("run.log", "Frequency: 2400 MHz\n").unwrap();
        assert!(result.timestamp >= before);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_parse_report_error_names_target() {
        let bad = "generated 1 k requests in 1.00 s, 1 MiB, 8.7 m iops, 1 MiB/s";
        let err = parse_report("bad.log", bad).unwrap_err();
        assert!(matches!(err, BenchmarkError::Extract { .. }));
        assert_eq!(
            err.to_string(),
            "bad.log: line 1: unknown iops unit marker 'm'"
        );
    }

    #[test]
    fn test_parse_files_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("2019-04-20-07_21_49.log");
        let second = dir.path().join("2019-04-21-07_21_49.log");
        fs::write(&first, REPORT).unwrap();
        fs::write(&second, "Frequency: 2400 MHz\n").unwrap();

        let results = parse_files(&[&first, &second]).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_complete());
        assert_eq!(results[1].sections.incomplete(), vec!["cpu", "ioping", "disk"]);
        assert_eq!(results[1].timestamp.to_rfc3339(), "2019-04-21T07:21:49+00:00");
    }

    #[test]
    fn test_parse_files_stops_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.log");
        let err = parse_files(&[missing]).unwrap_err();
        assert!(matches!(err, BenchmarkError::Read { .. }));
    }
}
