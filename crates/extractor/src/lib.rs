// Copyright 2025 nench-report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Metric extractor for nench benchmark reports.
//!
//! Turns the plain-text output of `nench.sh` into a [`ReportRecord`]: CPU
//! clock and hashing/compression/encryption timings, ioping seek latency
//! and sequential read figures, and the dd sequential write average.
//!
//! # Quick Start
//!
//! ```
//! let report = "Frequency: 2400.0 MHz\n1.23 seconds\n4.56 seconds\n7.89 seconds\n";
//! let record = nench_extractor::extract(report).unwrap();
//!
//! assert_eq!(record.cpu.aes_duration_seconds, Some(7.89));
//! assert_eq!(record.disk.average_throughput_mib_s, None);
//! ```
//!
//! # Modules
//!
//! - [`extractor`] - The single-pass scanner and its section state
//! - [`record`] - The extracted record
//! - [`units`] - Unit normalization helpers
//! - [`patterns`] - The recognized line patterns
//! - [`error`] - Extraction errors

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod extractor;
pub mod patterns;
pub mod record;
pub mod units;

pub use error::{ExtractError, Result};
pub use extractor::{extract, scan, CpuStage, Extraction, Extractor, SectionState};
pub use record::{CpuResults, DiskResults, IoResults, ReportRecord, SeekLatency, SequentialRead};
