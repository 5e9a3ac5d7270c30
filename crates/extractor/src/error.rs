// Copyright 2025 nench-report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Extraction errors.
//!
//! A field that never matched is not an error; it stays `None` in the
//! record. These variants cover lines that matched a pattern but carry a
//! value the extractor cannot interpret. Either one aborts the scan.

use thiserror::Error;

/// Errors that abort report extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The iops value of a sequential-read line carries a marker other than `k`.
    #[error("line {line}: unknown iops unit marker '{unit}'")]
    UnknownIopsUnit {
        /// 1-based line number
        line: usize,
        /// The marker as it appeared in the report
        unit: String,
    },

    /// A captured numeric value could not be parsed.
    ///
    /// The built-in patterns only capture plain decimals, so this is not
    /// reachable through them; it keeps number parsing free of panics.
    #[error("line {line}: invalid number '{value}' for {field}")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Record field the value was meant for
        field: &'static str,
        /// The captured text
        value: String,
    },
}

/// Result type for extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_line_numbers() {
        let err = ExtractError::UnknownIopsUnit {
            line: 17,
            unit: "m".to_string(),
        };
        assert_eq!(err.to_string(), "line 17: unknown iops unit marker 'm'");

        let err = ExtractError::InvalidNumber {
            line: 3,
            field: "clockFrequencyMHz",
            value: "1e999x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 3: invalid number '1e999x' for clockFrequencyMHz"
        );
    }
}
