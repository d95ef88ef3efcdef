//! # Executor Configuration Module / 执行器配置模块
//!
//! The read-only configuration that drives selection: declared file order,
//! ignore patterns, name ordering, the injected base URL and the run counts
//! registered with the results holders. Loaded from a TOML file.
//!
//! 驱动选择过程的只读配置：声明的文件顺序、忽略模式、按名称排序、
//! 注入的基础 URL 以及向结果持有者注册的运行次数。从 TOML 文件加载。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::{fs::expand_path, t};

/// The default file name looked up by the CLI. / CLI 默认查找的配置文件名。
pub const DEFAULT_CONFIG_FILE: &str = "gatf-config.toml";

/// Executor configuration, loaded from a TOML file.
/// Every field has a default, so a partial file is valid.
///
/// 从 TOML 文件加载的执行器配置。
/// 每个字段都有默认值，因此部分配置文件也是有效的。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExecutorConfig {
    /// The language for output messages (e.g., "en", "zh-CN").
    /// 输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory holding the test case files. Supports `~` and `$VAR`, and is
    /// resolved against the config file's directory when relative.
    ///
    /// 存放测试用例文件的目录。支持 `~` 和 `$VAR`，
    /// 为相对路径时相对于配置文件所在目录解析。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case_dir: Option<String>,

    /// Base URL stamped on every discovered test case.
    /// 写入每个已发现测试用例的基础 URL。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Sort files with the alphanumeric comparator when no explicit order is declared.
    /// 未声明显式顺序时，使用字母数字比较器对文件排序。
    #[serde(default)]
    pub order_by_file_name: bool,

    /// File names to process first, in this order.
    /// 优先处理的文件名，按此顺序。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_files: Option<Vec<String>>,

    /// Ignore patterns: `*`, `*.*`, `*.ext`, `prefix*`, `*suffix` or an exact name.
    /// 忽略模式：`*`、`*.*`、`*.ext`、`prefix*`、`*suffix` 或精确文件名。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_files: Option<Vec<String>>,

    #[serde(default)]
    pub concurrent_user_simulation_num: u32,

    /// When set, overrides `concurrent_user_simulation_num` as the run count.
    /// 设置后，将代替 `concurrent_user_simulation_num` 作为运行次数。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_base_urls_num: Option<u32>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            test_case_dir: None,
            base_url: None,
            order_by_file_name: false,
            ordered_files: None,
            ignore_files: None,
            concurrent_user_simulation_num: 0,
            compare_base_urls_num: None,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

impl ExecutorConfig {
    /// A starter configuration written by `init`.
    /// `init` 命令写入的初始配置。
    pub fn starter() -> Self {
        Self {
            test_case_dir: Some("./testcases".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
            order_by_file_name: true,
            ignore_files: Some(vec!["*.bak".to_string(), "draft*".to_string()]),
            ..Self::default()
        }
    }

    /// The number of runs registered for each resolved file.
    /// 为每个已解析文件注册的运行次数。
    pub fn run_count(&self) -> u32 {
        self.compare_base_urls_num
            .unwrap_or(self.concurrent_user_simulation_num)
    }

    /// Resolves `test_case_dir` against `config_dir`, expanding `~` and
    /// environment variables. Returns `None` when no directory is configured.
    pub fn resolve_test_case_dir(&self, config_dir: &Path) -> Result<Option<PathBuf>> {
        let Some(dir) = &self.test_case_dir else {
            return Ok(None);
        };
        let expanded = expand_path(dir)?;
        if expanded.is_absolute() {
            Ok(Some(expanded))
        } else {
            Ok(Some(config_dir.join(expanded)))
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize executor configuration")
    }
}

/// Reads and parses an executor configuration file.
///
/// # Arguments / 参数
/// * `config_path_arg` - Path to the TOML file / TOML 文件路径
///
/// # Returns / 返回值
/// The parsed configuration and the canonical path it was read from.
/// 解析后的配置及其规范化路径。
pub fn load_config(config_path_arg: &Path) -> Result<(ExecutorConfig, PathBuf)> {
    let config_path = fs::canonicalize(config_path_arg).with_context(|| {
        t!("config.read_failed", path = config_path_arg.display()).to_string()
    })?;

    let content = fs::read_to_string(&config_path)
        .with_context(|| t!("config.read_failed", path = config_path.display()).to_string())?;

    let config: ExecutorConfig = toml::from_str(&content)
        .with_context(|| t!("config.parse_failed", path = config_path.display()).to_string())?;

    Ok((config, config_path))
}
