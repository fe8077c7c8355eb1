//! Shared helpers for postprocessor integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Fresh run directory holding `file` with `content`
pub fn run_dir_with(file: &str, content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create run dir");
    write_output(dir.path(), file, content);
    dir
}

pub fn write_output(run_dir: &Path, file: &str, content: &str) {
    fs::write(run_dir.join(file), content).expect("write run output");
}

/// Whitespace-separated row of `values`
pub fn row(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
