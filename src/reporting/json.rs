//! # JSON Report Module / JSON 报告模块
//!
//! Writes a discovery run as a pretty-printed JSON document.
//! 将一次发现运行写为格式化的 JSON 文档。

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::engine::models::{Discovery, FileFailure, FileType, TestCase};

/// The serialized shape of a discovery report.
/// 发现报告的序列化结构。
#[derive(Debug, Serialize)]
pub struct DiscoveryReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub root: &'a Path,
    pub file_type: FileType,
    pub test_cases: &'a [TestCase],
    pub failures: &'a [FileFailure],
}

impl<'a> DiscoveryReport<'a> {
    pub fn new(discovery: &'a Discovery, root: &'a Path, file_type: FileType) -> Self {
        Self {
            generated_at: Utc::now(),
            root,
            file_type,
            test_cases: &discovery.test_cases,
            failures: &discovery.failures,
        }
    }
}

/// Writes the discovery report to `report_path`.
///
/// # Arguments
/// * `discovery` - The discovery outcome
/// * `root` - The directory that was searched
/// * `file_type` - The file format that was resolved
/// * `report_path` - Where to write the JSON document
pub fn write_json_report(
    discovery: &Discovery,
    root: &Path,
    file_type: FileType,
    report_path: &Path,
) -> Result<()> {
    let report = DiscoveryReport::new(discovery, root, file_type);
    let content =
        serde_json::to_string_pretty(&report).context("Failed to serialize discovery report")?;
    fs::write(report_path, content)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn report_serializes_cases_and_failures() {
        let discovery = Discovery {
            test_cases: vec![TestCase {
                name: "login".to_string(),
                source_file_name: Some("login.json".to_string()),
                ..TestCase::default()
            }],
            failures: vec![FileFailure {
                file: PathBuf::from("cases/bad.json"),
                cause: "expected value".to_string(),
            }],
        };
        let root = PathBuf::from("cases");
        let report = DiscoveryReport::new(&discovery, &root, FileType::Json);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["file_type"], "json");
        assert_eq!(value["test_cases"][0]["sourceFileName"], "login.json");
        assert_eq!(value["failures"][0]["cause"], "expected value");
        assert!(value["generated_at"].is_string());
    }
}
