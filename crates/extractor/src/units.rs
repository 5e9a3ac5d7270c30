// Copyright 2025 nench-report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unit normalization for report values.
//!
//! nench reports mix time units (`us`, `ms`, `s`), a `k` count suffix and
//! binary-looking volume units. Volumes are scaled by 1000 between tiers,
//! not 1024, because that is how the report itself scales them.
//!
//! Every helper returns `None` for a unit outside its table. Callers must
//! keep the field absent in that case rather than substitute a number.

/// Convert a duration to microseconds.
pub fn to_micros(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "s" => Some(value * 1_000_000.0),
        "ms" => Some(value * 1_000.0),
        "us" => Some(value),
        _ => None,
    }
}

/// Convert a count with an optional `k` marker to an absolute count.
pub fn to_absolute(value: f64, unit: Option<&str>) -> Option<f64> {
    match unit {
        None => Some(value),
        Some("k") => Some(value * 1_000.0),
        Some(_) => None,
    }
}

/// Convert a volume to MiB using decimal tiers.
pub fn to_mib(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "GiB" => Some(value * 1_000.0),
        "MiB" => Some(value),
        "KiB" => Some(value / 1_000.0),
        _ => None,
    }
}

/// Convert a `<volume>/s` throughput to MiB/s using decimal tiers.
pub fn to_mib_per_sec(value: f64, unit: &str) -> Option<f64> {
    let volume_unit = unit.strip_suffix("/s")?;
    to_mib(value, volume_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_micros() {
        assert_eq!(to_micros(1.0, "s"), Some(1_000_000.0));
        assert_eq!(to_micros(500.0, "ms"), Some(500_000.0));
        assert_eq!(to_micros(86.1, "us"), Some(86.1));
    }

    #[test]
    fn test_to_micros_unknown_unit_is_absent() {
        assert_eq!(to_micros(1.0, "ns"), None);
        assert_eq!(to_micros(1.0, "min"), None);
        assert_eq!(to_micros(1.0, ""), None);
    }

    #[test]
    fn test_to_absolute() {
        assert_eq!(to_absolute(512.0, Some("k")), Some(512_000.0));
        assert_eq!(to_absolute(42.0, None), Some(42.0));
        assert_eq!(to_absolute(3.0, Some("m")), None);
    }

    #[test]
    fn test_to_mib_is_decimal() {
        assert_eq!(to_mib(2.0, "GiB"), Some(2000.0));
        assert_eq!(to_mib(823.2, "MiB"), Some(823.2));
        assert_eq!(to_mib(500.0, "KiB"), Some(0.5));
    }

    #[test]
    fn test_to_mib_is_case_sensitive() {
        assert_eq!(to_mib(1.0, "gib"), None);
        assert_eq!(to_mib(1.0, "GB"), None);
        assert_eq!(to_mib(1.0, "TiB"), None);
    }

    #[test]
    fn test_to_mib_per_sec() {
        assert_eq!(to_mib_per_sec(1.5, "GiB/s"), Some(1500.0));
        assert_eq!(to_mib_per_sec(162.45, "MiB/s"), Some(162.45));
        assert_eq!(to_mib_per_sec(250.0, "KiB/s"), Some(0.25));
    }

    #[test]
    fn test_to_mib_per_sec_requires_rate_suffix() {
        assert_eq!(to_mib_per_sec(1.0, "MiB"), None);
        assert_eq!(to_mib_per_sec(1.0, "MB/s"), None);
        assert_eq!(to_mib_per_sec(1.0, "/s"), None);
    }
}
