// Copyright 2025 nench-report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Result record types.
//!
//! Every metric is optional. A `None` means the pattern for that metric
//! never matched (or matched with a unit the extractor does not know) and
//! serializes as `null`.

use serde::{Deserialize, Serialize};

/// Metrics extracted from one nench report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// CPU benchmark results
    pub cpu: CpuResults,
    /// ioping results
    pub io: IoResults,
    /// dd sequential write results
    pub disk: DiskResults,
}

/// CPU clock and the three timed CPU workloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuResults {
    /// Reported clock frequency in MHz
    #[serde(rename = "clockFrequencyMHz")]
    pub clock_frequency_mhz: Option<f64>,
    /// SHA256 hashing time in seconds
    #[serde(rename = "sha256DurationSeconds")]
    pub sha256_duration_seconds: Option<f64>,
    /// bzip2 compression time in seconds
    #[serde(rename = "bzip2DurationSeconds")]
    pub bzip2_duration_seconds: Option<f64>,
    /// AES encryption time in seconds
    #[serde(rename = "aesDurationSeconds")]
    pub aes_duration_seconds: Option<f64>,
}

/// ioping seek latency and sequential read results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoResults {
    /// Seek rate statistics
    pub seek_latency: SeekLatency,
    /// Sequential read speed
    pub sequential_read: SequentialRead,
}

/// Seek latency statistics, all in microseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekLatency {
    /// Fastest request
    pub min_microseconds: Option<f64>,
    /// Average request
    pub avg_microseconds: Option<f64>,
    /// Slowest request
    pub max_microseconds: Option<f64>,
    /// Mean deviation
    pub mdev_microseconds: Option<f64>,
}

/// ioping sequential read summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequentialRead {
    /// Number of requests issued
    #[serde(rename = "requestsAbsolute")]
    pub requests_absolute: Option<f64>,
    /// Wall time of the run
    #[serde(rename = "elapsedMicroseconds")]
    pub elapsed_microseconds: Option<f64>,
    /// Volume read, decimal MiB
    #[serde(rename = "volumeMiB")]
    pub volume_mib: Option<f64>,
    /// I/O operations per second
    pub iops: Option<f64>,
    /// Throughput, decimal MiB/s
    #[serde(rename = "throughputMiBs")]
    pub throughput_mib_s: Option<f64>,
}

/// dd sequential write average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskResults {
    /// Average write throughput, decimal MiB/s
    #[serde(rename = "averageThroughputMiBs")]
    pub average_throughput_mib_s: Option<f64>,
}

impl ReportRecord {
    /// Returns true if no metric was extracted at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
