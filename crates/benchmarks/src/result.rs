//! Benchmark result envelope.
//!
//! Wraps the record extracted from one report with the report it came
//! from and the time the benchmark ran.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use nench_extractor::{Extraction, ReportRecord, SectionState};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header line nench prints before the results.
const TIMESTAMP_HEADER: &str = "benchmark timestamp:";

/// The timestamp header sits within the banner at the top of the report.
const HEADER_LINES: usize = 10;

/// One parsed nench report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Report path, or `-` for stdin.
    pub target_id: String,
    /// Extracted metrics.
    pub metrics: ReportRecord,
    /// Which report sections were found complete.
    pub sections: SectionState,
    /// When the benchmark ran.
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Create a BenchmarkResult from an extraction.
    pub fn new(
        target_id: impl Into<String>,
        extraction: Extraction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            metrics: extraction.record,
            sections: extraction.sections,
            timestamp,
        }
    }

    /// Returns true if every report section was found.
    pub fn is_complete(&self) -> bool {
        self.sections.all_complete()
    }
}

/// Determine when a report was produced.
///
/// Prefers the `benchmark timestamp:` header, then a nench-style
/// `YYYY-MM-DD-HH_MM_SS` file name. Returns `None` if neither is usable.
pub fn report_timestamp(target_id: &str, content: &str) -> Option<DateTime<Utc>> {
    header_timestamp(content).or_else(|| file_name_timestamp(target_id))
}

fn header_timestamp(content: &str) -> Option<DateTime<Utc>> {
    let value = content
        .lines()
        .take(HEADER_LINES)
        .find_map(|line| line.split_once(TIMESTAMP_HEADER))
        .map(|(_, value)| value.trim())?;
    let value = value.strip_suffix("UTC").unwrap_or(value).trim_end();
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

fn file_name_timestamp(target_id: &str) -> Option<DateTime<Utc>> {
    let stem = Path::new(target_id).file_stem()?.to_str()?;
    let naive = NaiveDateTime::parse_from_str(stem, "%Y-%m-%d-%H_%M_%S").ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "\
-------------------------------------------------
 nench.sh v2019.07.20 -- https://git.io/nench.sh
 benchmark timestamp:    2019-04-20 07:21:49 UTC
-------------------------------------------------
";

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_timestamp_from_header() {
        assert_eq!(
            report_timestamp("-", BANNER),
            Some(utc("2019-04-20T07:21:49Z"))
        );
    }

    #[test]
    fn test_header_wins_over_file_name() {
        assert_eq!(
            report_timestamp("logs/2020-01-01-00_00_00.log", BANNER),
            Some(utc("2019-04-20T07:21:49Z"))
        );
    }

    #[test]
    fn test_timestamp_from_file_name() {
        assert_eq!(
            report_timestamp("example/2019-04-20-07_21_49.log", "no banner here"),
            Some(utc("2019-04-20T07:21:49Z"))
        );
    }

    #[test]
    fn test_no_timestamp() {
        assert_eq!(report_timestamp("report.txt", ""), None);
        assert_eq!(
            report_timestamp("-", " benchmark timestamp:    yesterday\n"),
            None
        );
    }

    #[test]
    fn test_is_complete_follows_sections() {
        let mut extraction = Extraction::default();
        let result = BenchmarkResult::new("a.log", extraction.clone(), Utc::now());
        assert!(!result.is_complete());

        extraction.sections = SectionState {
            cpu: true,
            ioping: true,
            disk: true,
        };
        let result = BenchmarkResult::new("a.log", extraction, Utc::now());
        assert!(result.is_complete());
    }
}
