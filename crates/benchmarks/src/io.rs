//! I/O operations for reports and benchmark results.
//!
//! This module reads nench reports from the filesystem or stdin and
//! writes extracted results as JSON.

use crate::error::{BenchmarkError, Result};
use crate::result::BenchmarkResult;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a report file into memory.
pub fn read_report(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| BenchmarkError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a report from stdin.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|source| BenchmarkError::Read {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buffer)
}

/// Ensure an output directory exists.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| BenchmarkError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write benchmark results to a JSON file as one array.
pub fn write_results_json(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    write_file(path.as_ref(), json)
}

/// Write an individual result into `dir`, returning the file written.
pub fn write_raw_result(result: &BenchmarkResult, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    ensure_output_dir(dir)?;
    let path = dir.join(raw_file_name(&result.target_id));
    let json = serde_json::to_string_pretty(result)?;
    write_file(&path, json)?;
    Ok(path)
}

/// Write one file per result into `dir`, returning the files written in order.
///
/// Distinct targets can flatten to the same file name (`a/b.log` and
/// `a_b.log`); later ones get a `-1`, `-2`, ... suffix so no result in the
/// batch overwrites another.
pub fn write_raw_results(
    results: &[BenchmarkResult],
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_output_dir(dir)?;

    let mut used = HashSet::new();
    let mut written = Vec::with_capacity(results.len());
    for result in results {
        let stem = raw_file_stem(&result.target_id);
        let mut name = format!("{stem}.json");
        let mut suffix = 1;
        while !used.insert(name.clone()) {
            name = format!("{stem}-{suffix}.json");
            suffix += 1;
        }

        let path = dir.join(name);
        let json = serde_json::to_string_pretty(result)?;
        write_file(&path, json)?;
        written.push(path);
    }
    Ok(written)
}

/// Read results from a JSON file written by [`write_results_json`].
pub fn read_results_json(path: impl AsRef<Path>) -> Result<Vec<BenchmarkResult>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| BenchmarkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn write_file(path: &Path, contents: String) -> Result<()> {
    fs::write(path, contents).map_err(|source| BenchmarkError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn raw_file_name(target_id: &str) -> String {
    format!("{}.json", raw_file_stem(target_id))
}

fn raw_file_stem(target_id: &str) -> String {
    if target_id == crate::STDIN_TARGET {
        return "stdin".to_string();
    }
    target_id.trim_start_matches("./").replace(['/', '\\'], "_")
}
