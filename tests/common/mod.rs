// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates an empty temporary directory for a test case tree.
pub fn setup_test_tree() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// Writes a JSON test case file holding one case per name.
pub fn write_cases(root: &Path, relative: &str, case_names: &[&str]) -> PathBuf {
    let cases: Vec<String> = case_names
        .iter()
        .map(|name| format!(r#"{{"name": "{name}", "url": "/{name}", "method": "GET"}}"#))
        .collect();
    write_file(root, relative, &format!("[{}]", cases.join(",")))
}

/// Writes an executor configuration file next to the test case tree.
pub fn write_config(root: &Path, content: &str) -> PathBuf {
    write_file(root, "gatf-config.toml", content)
}

/// Sorted file names, for comparing traversal output without relying on listing order.
pub fn sorted_names(files: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
