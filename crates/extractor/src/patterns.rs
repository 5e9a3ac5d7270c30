// Copyright 2025 nench-report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Line patterns recognized in a nench report.
//!
//! Capture groups are named after the record field they feed, so the
//! mapping from report text to record lives here and nowhere else:
//!
//! | Pattern         | Group             | Field                                  |
//! |-----------------|-------------------|----------------------------------------|
//! | `FREQUENCY`     | `mhz`             | `cpu.clockFrequencyMHz`                |
//! | `CPU_DURATION`  | `seconds`         | sha256 / bzip2 / aes, by ordinal       |
//! | `SEEK`          | `min`, `avg`, `max`, `mdev` (+ `_unit`) | `io.seekLatency.*`  |
//! | `SEQUENTIAL`    | `requests` (+ `requests_unit`) | `requestsAbsolute`        |
//! |                 | `time`, `time_unit` | `elapsedMicroseconds`                |
//! |                 | `volume`, `volume_unit` | `volumeMiB`                      |
//! |                 | `iops`, `iops_unit` | `iops`                               |
//! |                 | `throughput`, `throughput_unit` | `throughputMiBs`         |
//! | `DISK_AVERAGE`  | `value`, `unit`   | `disk.averageThroughputMiBs`           |

use once_cell::sync::Lazy;
use regex::Regex;

/// Unsigned decimal number as printed by nench, ioping and dd.
const NUM: &str = r"[0-9]+(?:\.[0-9]+)?";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in report pattern must compile")
}

/// `Frequency:    2799.998 MHz`
pub static FREQUENCY: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^Frequency:\s*(?P<mhz>{NUM}) MHz")));

/// `    3.155 seconds`
pub static CPU_DURATION: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?P<seconds>{NUM}) seconds")));

/// `min/avg/max/mdev = 95.2 us / 233.4 us / 8.94 ms / 179.1 us`
pub static SEEK: Lazy<Regex> = Lazy::new(|| {
    let stat = |name: &str| format!(r"(?P<{name}>{NUM}) (?P<{name}_unit>us|ms|s)");
    compile(&format!(
        r"min/avg/max/mdev = {} / {} / {} / {}",
        stat("min"),
        stat("avg"),
        stat("max"),
        stat("mdev"),
    ))
});

/// `generated 3.29 k requests in 5.00 s, 823.2 MiB, 658 iops, 164.6 MiB/s`
pub static SEQUENTIAL: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        concat!(
            r"(?i)generated (?P<requests>{num})(?: (?P<requests_unit>[a-z]+))? requests",
            r" in (?P<time>{num}) (?P<time_unit>[a-z]+),",
            r" (?P<volume>{num}) (?P<volume_unit>[a-z]{{3}}),",
            r" (?P<iops>{num})(?: (?P<iops_unit>[a-z]+))? iops,",
            r" (?P<throughput>{num}) (?P<throughput_unit>[a-z]{{3}}/s)",
        ),
        num = NUM
    ))
});

/// `    average:    1112.62 MiB/s`
pub static DISK_AVERAGE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i:average):\s*(?P<value>{NUM}) (?P<unit>[GMK]iB/s)"
    ))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_is_anchored() {
        assert!(FREQUENCY.is_match("Frequency:    2799.998 MHz"));
        assert!(FREQUENCY.is_match("Frequency: 2400 MHz"));
        assert!(!FREQUENCY.is_match("CPU Frequency: 2400 MHz"));
        assert_eq!(&FREQUENCY.captures("Frequency: 2400.0 MHz").unwrap()["mhz"], "2400.0");
    }

    #[test]
    fn test_cpu_duration() {
        let caps = CPU_DURATION.captures("        3.155 seconds").unwrap();
        assert_eq!(&caps["seconds"], "3.155");
        assert!(!CPU_DURATION.is_match("CPU: SHA256-hashing 500 MB"));
    }

    #[test]
    fn test_seek_groups() {
        let caps = SEEK
            .captures("    min/avg/max/mdev = 95.2 us / 233.4 us / 8.94 ms / 1 s")
            .unwrap();
        assert_eq!(&caps["min"], "95.2");
        assert_eq!(&caps["min_unit"], "us");
        assert_eq!(&caps["max"], "8.94");
        assert_eq!(&caps["max_unit"], "ms");
        assert_eq!(&caps["mdev"], "1");
        assert_eq!(&caps["mdev_unit"], "s");
    }

    #[test]
    fn test_seek_rejects_other_time_units() {
        assert!(!SEEK.is_match("min/avg/max/mdev = 1 ns / 2 ns / 3 ns / 4 ns"));
    }

    #[test]
    fn test_sequential_groups() {
        let caps = SEQUENTIAL
            .captures("generated 3.29 k requests in 5.00 s, 823.2 MiB, 658 iops, 164.6 MiB/s")
            .unwrap();
        assert_eq!(&caps["requests"], "3.29");
        assert_eq!(&caps["requests_unit"], "k");
        assert_eq!(&caps["time"], "5.00");
        assert_eq!(&caps["time_unit"], "s");
        assert_eq!(&caps["volume"], "823.2");
        assert_eq!(&caps["volume_unit"], "MiB");
        assert_eq!(&caps["iops"], "658");
        assert!(caps.name("iops_unit").is_none());
        assert_eq!(&caps["throughput"], "164.6");
        assert_eq!(&caps["throughput_unit"], "MiB/s");
    }

    #[test]
    fn test_sequential_optional_markers() {
        let caps = SEQUENTIAL
            .captures("generated 250 requests in 500 ms, 62.5 KiB, 8.7 k iops, 125.0 KiB/s")
            .unwrap();
        assert!(caps.name("requests_unit").is_none());
        assert_eq!(&caps["time_unit"], "ms");
        assert_eq!(&caps["iops_unit"], "k");
    }

    #[test]
    fn test_disk_average_case_insensitive() {
        let caps = DISK_AVERAGE.captures("    Average:  1112.62 MiB/s").unwrap();
        assert_eq!(&caps["value"], "1112.62");
        assert_eq!(&caps["unit"], "MiB/s");
        assert!(!DISK_AVERAGE.is_match("    1st run:    1049.04 MiB/s"));
    }

    #[test]
    fn test_disk_average_only_known_units() {
        assert!(DISK_AVERAGE.is_match("average: 1.5 GiB/s"));
        assert!(DISK_AVERAGE.is_match("average: 250 KiB/s"));
        assert!(!DISK_AVERAGE.is_match("average: 512.0 MB/s"));
        assert!(!DISK_AVERAGE.is_match("average: 512.0 mib/s"));
        assert!(!DISK_AVERAGE.is_match("average: 512.0 TiB/s"));
    }
}
