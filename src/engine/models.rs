//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the finder.
//! It includes the resolved test case record, the supported file types, the
//! outcome of a discovery run and the results-holder registry.
//!
//! 此模块定义了整个查找器中使用的核心数据结构。
//! 它包括解析后的测试用例记录、支持的文件类型、一次发现运行的结果以及结果持有者注册表。

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A single resolved acceptance test case.
///
/// Resolvers fill in the descriptive fields; the finder stamps the
/// cross-cutting ones (`source_file_name`, `simulation_number`, `base_url`).
///
/// 单个已解析的验收测试用例。
/// 解析器填写描述性字段；查找器负责写入横切字段
/// （`source_file_name`、`simulation_number`、`base_url`）。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// The name of the test case, used for identification in reports.
    /// 测试用例的名称，用于在报告中识别。
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// The request path, relative to the base URL.
    /// 请求路径，相对于基础 URL。
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// The request body, if any. / 请求体（如果有）。
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "default_expected_res_code")]
    pub expected_res_code: u16,
    #[serde(default)]
    pub sequence: Option<u32>,
    /// The simulation this case belongs to. Defaults to 0 after discovery.
    /// 此用例所属的模拟编号。发现后默认为 0。
    #[serde(default)]
    pub simulation_number: Option<u32>,
    /// The base URL the case runs against, injected from configuration.
    /// 用例运行所针对的基础 URL，从配置中注入。
    #[serde(default)]
    pub base_url: Option<String>,
    /// The name of the file this case was resolved from. Only ever set by the
    /// finder, never read from a test case file.
    ///
    /// 解析此用例的文件名。只由查找器设置，从不从测试用例文件中读取。
    #[serde(default, skip_deserializing)]
    pub source_file_name: Option<String>,
}

impl Default for TestCase {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            description: None,
            url: "".to_string(),
            method: default_method(),
            headers: BTreeMap::new(),
            content: None,
            expected_res_code: default_expected_res_code(),
            sequence: None,
            simulation_number: None,
            base_url: None,
            source_file_name: None,
        }
    }
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_expected_res_code() -> u16 {
    200
}

/// The test case file formats the finder knows how to select.
/// 查找器能够选择的测试用例文件格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Xml,
    Json,
    Csv,
}

impl FileType {
    /// The file name suffix for this format, including the dot.
    /// 此格式的文件名后缀，包括点号。
    pub fn ext(self) -> &'static str {
        match self {
            FileType::Xml => ".xml",
            FileType::Json => ".json",
            FileType::Csv => ".csv",
        }
    }

    /// Checks a file name against this format's suffix, ignoring case.
    /// 检查文件名是否以此格式的后缀结尾（不区分大小写）。
    pub fn matches_name(self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(self.ext())
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Xml => write!(f, "xml"),
            FileType::Json => write!(f, "json"),
            FileType::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for FileType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "xml" => Ok(FileType::Xml),
            "json" => Ok(FileType::Json),
            "csv" => Ok(FileType::Csv),
            other => bail!("Unsupported test case file type: {}", other),
        }
    }
}

/// A file that could not be resolved, together with the cause.
/// 无法解析的文件及其原因。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    pub file: PathBuf,
    pub cause: String,
}

/// The outcome of a discovery run: every resolved test case in processing
/// order, plus the files that failed to resolve.
///
/// 一次发现运行的结果：按处理顺序排列的所有已解析测试用例，以及解析失败的文件。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Discovery {
    pub test_cases: Vec<TestCase>,
    pub failures: Vec<FileFailure>,
}

impl Discovery {
    /// `true` if no file failed to resolve.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The distinct source file names, in the order their cases appear.
    /// 按用例出现顺序排列的不同源文件名。
    pub fn source_files(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self
            .test_cases
            .iter()
            .filter_map(|case| case.source_file_name.as_deref())
        {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// One results-holder registration made while discovering a file.
/// 在发现文件时进行的一次结果持有者注册。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub runs: u32,
    pub source_file: String,
}

/// Tracks the expected number of runs per source file, to be consumed later
/// by execution and result aggregation.
///
/// 跟踪每个源文件的预期运行次数，供后续执行和结果汇总使用。
#[derive(Debug, Clone, Default)]
pub struct ResultsHolders {
    registrations: Vec<Registration>,
}

impl ResultsHolders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, runs: u32, source_file: &str) {
        self.registrations.push(Registration {
            runs,
            source_file: source_file.to_string(),
        });
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// The run count most recently registered for `source_file`.
    pub fn runs_for(&self, source_file: &str) -> Option<u32> {
        self.registrations
            .iter()
            .rev()
            .find(|r| r.source_file == source_file)
            .map(|r| r.runs)
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_matches_suffix_case_insensitively() {
        assert!(FileType::Json.matches_name("login.JSON"));
        assert!(FileType::Xml.matches_name("suite.Xml"));
        assert!(!FileType::Csv.matches_name("data.csv.bak"));
        assert!(!FileType::Json.matches_name("json"));
    }

    #[test]
    fn file_type_parses_with_or_without_dot() {
        assert_eq!(".csv".parse::<FileType>().unwrap(), FileType::Csv);
        assert_eq!("JSON".parse::<FileType>().unwrap(), FileType::Json);
        assert!("yaml".parse::<FileType>().is_err());
    }

    #[test]
    fn source_file_name_is_never_deserialized() {
        let case: TestCase = serde_json::from_str(
            r#"{"name": "login", "url": "/login", "sourceFileName": "forged.json"}"#,
        )
        .unwrap();
        assert_eq!(case.source_file_name, None);
        assert_eq!(case.method, "GET");
        assert_eq!(case.expected_res_code, 200);
    }

    #[test]
    fn source_files_are_distinct_and_ordered() {
        let mut a = TestCase::default();
        a.source_file_name = Some("b.json".to_string());
        let mut b = a.clone();
        b.source_file_name = Some("a.json".to_string());
        let discovery = Discovery {
            test_cases: vec![a.clone(), a, b],
            failures: vec![],
        };
        assert_eq!(discovery.source_files(), vec!["b.json", "a.json"]);
    }

    #[test]
    fn results_holders_report_latest_runs() {
        let mut holders = ResultsHolders::new();
        holders.register(2, "a.json");
        holders.register(5, "a.json");
        assert_eq!(holders.runs_for("a.json"), Some(5));
        assert_eq!(holders.runs_for("b.json"), None);
        assert_eq!(holders.registrations().len(), 2);
    }
}
