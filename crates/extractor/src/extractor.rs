// Copyright 2025 nench-report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Single-pass report extractor.
//!
//! The report is read top to bottom exactly once. Three sections are
//! tracked independently (CPU, ioping, dd); each line is offered to every
//! section that has not completed yet. Fields are write-once: the first
//! matching line wins and later matches are ignored.
//!
//! # Ordinal CPU timings
//!
//! nench prints one `Frequency:` line followed by three `<n> seconds`
//! lines for SHA256, bzip2 and AES, in that order. The timing lines carry
//! no label the extractor looks at, so meaning is assigned purely by
//! position through [`CpuStage`]. A report that drops or reorders one of
//! those lines is silently mis-assigned; nothing here tries to detect it.

use crate::error::{ExtractError, Result};
use crate::patterns::{CPU_DURATION, DISK_AVERAGE, FREQUENCY, SEEK, SEQUENTIAL};
use crate::record::{ReportRecord, SeekLatency, SequentialRead};
use crate::units;
use regex::Captures;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Progress through the CPU section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CpuStage {
    /// Waiting for the `Frequency:` line
    #[default]
    AwaitFrequency,
    /// Next timing line is SHA256
    AwaitSha256,
    /// Next timing line is bzip2
    AwaitBzip2,
    /// Next timing line is AES
    AwaitAes,
    /// All four values captured
    Done,
}

impl CpuStage {
    fn advance(self) -> Self {
        match self {
            Self::AwaitFrequency => Self::AwaitSha256,
            Self::AwaitSha256 => Self::AwaitBzip2,
            Self::AwaitBzip2 => Self::AwaitAes,
            Self::AwaitAes | Self::Done => Self::Done,
        }
    }
}

/// Completion flags for the three report sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionState {
    /// AES timing seen
    pub cpu: bool,
    /// Sequential read line seen
    pub ioping: bool,
    /// dd average seen
    pub disk: bool,
}

impl SectionState {
    /// Returns true once every section has completed.
    pub fn all_complete(&self) -> bool {
        self.cpu && self.ioping && self.disk
    }

    /// Names of the sections that have not completed.
    pub fn incomplete(&self) -> Vec<&'static str> {
        [("cpu", self.cpu), ("ioping", self.ioping), ("disk", self.disk)]
            .into_iter()
            .filter(|(_, done)| !done)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Record and section flags produced by one scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Extracted metrics
    pub record: ReportRecord,
    /// Which sections reached their terminal line
    pub sections: SectionState,
}

/// Incremental extractor state for one report.
///
/// Feed lines in report order with [`Extractor::feed_line`], then take
/// the record with [`Extractor::finish`].
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    record: ReportRecord,
    sections: SectionState,
    cpu_stage: CpuStage,
    seek_seen: bool,
    line: usize,
}

impl Extractor {
    /// Create an extractor with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current section flags.
    pub fn sections(&self) -> SectionState {
        self.sections
    }

    /// Current CPU stage.
    pub fn cpu_stage(&self) -> CpuStage {
        self.cpu_stage
    }

    /// Returns true once all sections have completed.
    pub fn is_done(&self) -> bool {
        self.sections.all_complete()
    }

    /// Number of lines fed so far.
    pub fn lines_scanned(&self) -> usize {
        self.line
    }

    /// The record as extracted so far.
    pub fn record(&self) -> &ReportRecord {
        &self.record
    }

    /// Offer the next report line to every incomplete section.
    ///
    /// # Errors
    ///
    /// Returns an error if the line matches a pattern but carries a value
    /// that cannot be interpreted. The extractor should not be fed further
    /// lines after that.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if !self.sections.cpu {
            self.match_cpu(line)?;
        }
        if !self.sections.ioping {
            self.match_io(line)?;
        }
        if !self.sections.disk {
            self.match_disk(line)?;
        }
        Ok(())
    }

    /// Consume the extractor and return the record.
    pub fn finish(self) -> ReportRecord {
        self.record
    }

    /// Consume the extractor and return the record with its section flags.
    pub fn into_extraction(self) -> Extraction {
        Extraction {
            record: self.record,
            sections: self.sections,
        }
    }

    fn match_cpu(&mut self, line: &str) -> Result<()> {
        let cpu = &mut self.record.cpu;
        match self.cpu_stage {
            CpuStage::AwaitFrequency => {
                let Some(caps) = FREQUENCY.captures(line) else {
                    return Ok(());
                };
                cpu.clock_frequency_mhz =
                    Some(number(&caps, "mhz", self.line, "clockFrequencyMHz")?);
            }
            CpuStage::AwaitSha256 | CpuStage::AwaitBzip2 | CpuStage::AwaitAes => {
                let Some(caps) = CPU_DURATION.captures(line) else {
                    return Ok(());
                };
                let (slot, field) = match self.cpu_stage {
                    CpuStage::AwaitSha256 => {
                        (&mut cpu.sha256_duration_seconds, "sha256DurationSeconds")
                    }
                    CpuStage::AwaitBzip2 => {
                        (&mut cpu.bzip2_duration_seconds, "bzip2DurationSeconds")
                    }
                    _ => (&mut cpu.aes_duration_seconds, "aesDurationSeconds"),
                };
                *slot = Some(number(&caps, "seconds", self.line, field)?);
            }
            CpuStage::Done => return Ok(()),
        }

        self.cpu_stage = self.cpu_stage.advance();
        if self.cpu_stage == CpuStage::Done {
            self.sections.cpu = true;
            debug!(line = self.line, "cpu section complete");
        }
        Ok(())
    }

    fn match_io(&mut self, line: &str) -> Result<()> {
        if !self.seek_seen {
            if let Some(caps) = SEEK.captures(line) {
                self.record.io.seek_latency = self.seek_latency(&caps)?;
                self.seek_seen = true;
                return Ok(());
            }
        }

        if let Some(caps) = SEQUENTIAL.captures(line) {
            self.record.io.sequential_read = self.sequential_read(&caps)?;
            self.sections.ioping = true;
            debug!(line = self.line, "ioping section complete");
        }
        Ok(())
    }

    fn match_disk(&mut self, line: &str) -> Result<()> {
        let Some(caps) = DISK_AVERAGE.captures(line) else {
            return Ok(());
        };
        let value = number(&caps, "value", self.line, "averageThroughputMiBs")?;
        let unit = text(&caps, "unit");
        let Some(average) = self.converted(
            units::to_mib_per_sec(value, unit),
            "averageThroughputMiBs",
            unit,
        ) else {
            return Ok(());
        };
        self.record.disk.average_throughput_mib_s = Some(average);
        self.sections.disk = true;
        debug!(line = self.line, "disk section complete");
        Ok(())
    }

    fn seek_latency(&self, caps: &Captures<'_>) -> Result<SeekLatency> {
        let stat = |name: &str, field: &'static str| -> Result<Option<f64>> {
            let value = number(caps, name, self.line, field)?;
            let unit = text(caps, &format!("{name}_unit"));
            Ok(self.converted(units::to_micros(value, unit), field, unit))
        };

        Ok(SeekLatency {
            min_microseconds: stat("min", "minMicroseconds")?,
            avg_microseconds: stat("avg", "avgMicroseconds")?,
            max_microseconds: stat("max", "maxMicroseconds")?,
            mdev_microseconds: stat("mdev", "mdevMicroseconds")?,
        })
    }

    fn sequential_read(&self, caps: &Captures<'_>) -> Result<SequentialRead> {
        let line = self.line;

        let iops = number(caps, "iops", line, "iops")?;
        let iops = match caps.name("iops_unit").map(|m| m.as_str()) {
            None => iops,
            Some("k") => iops * 1_000.0,
            Some(other) => {
                return Err(ExtractError::UnknownIopsUnit {
                    line,
                    unit: other.to_string(),
                })
            }
        };

        let requests = number(caps, "requests", line, "requestsAbsolute")?;
        let requests_unit = caps.name("requests_unit").map(|m| m.as_str());
        let requests_absolute = self.converted(
            units::to_absolute(requests, requests_unit),
            "requestsAbsolute",
            requests_unit.unwrap_or_default(),
        );

        let time = number(caps, "time", line, "elapsedMicroseconds")?;
        let time_unit = text(caps, "time_unit");
        let volume = number(caps, "volume", line, "volumeMiB")?;
        let volume_unit = text(caps, "volume_unit");
        let throughput = number(caps, "throughput", line, "throughputMiBs")?;
        let throughput_unit = text(caps, "throughput_unit");

        Ok(SequentialRead {
            requests_absolute,
            elapsed_microseconds: self.converted(
                units::to_micros(time, time_unit),
                "elapsedMicroseconds",
                time_unit,
            ),
            volume_mib: self.converted(units::to_mib(volume, volume_unit), "volumeMiB", volume_unit),
            iops: Some(iops),
            throughput_mib_s: self.converted(
                units::to_mib_per_sec(throughput, throughput_unit),
                "throughputMiBs",
                throughput_unit,
            ),
        })
    }

    fn converted(&self, value: Option<f64>, field: &'static str, unit: &str) -> Option<f64> {
        if value.is_none() {
            warn!(line = self.line, field, unit, "unrecognized unit, leaving field empty");
        }
        value
    }
}

fn text<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map(|m| m.as_str()).unwrap_or_default()
}

fn number(caps: &Captures<'_>, name: &str, line: usize, field: &'static str) -> Result<f64> {
    let value = text(caps, name);
    value.parse().map_err(|_| ExtractError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

/// Scan a full report and return the record together with section flags.
///
/// Scanning stops as soon as every section has completed.
///
/// # Errors
///
/// Returns [`ExtractError`] on the first malformed match; no partial
/// record is returned in that case.
pub fn scan(text: &str) -> Result<Extraction> {
    let mut extractor = Extractor::new();
    for line in text.lines() {
        extractor.feed_line(line)?;
        if extractor.is_done() {
            debug!(
                lines = extractor.lines_scanned(),
                "all sections complete, stopping early"
            );
            break;
        }
    }
    Ok(extractor.into_extraction())
}

/// Extract the metrics of a nench report.
///
/// Metrics whose lines never appear stay `None`.
///
/// # Errors
///
/// Returns [`ExtractError`] if a matched line carries an unusable value,
/// such as an iops marker other than `k`.
pub fn extract(text: &str) -> Result<ReportRecord> {
    scan(text).map(|extraction| extraction.record)
}
