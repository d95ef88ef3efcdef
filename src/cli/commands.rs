//! # Commands Module / 命令模块
//!
//! The subcommands of the CLI and the option handling they share.
//! CLI 的子命令及其共享的选项处理。

pub mod find;
pub mod init;
pub mod plan;

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::engine::config::{load_config, ExecutorConfig, DEFAULT_CONFIG_FILE};
use crate::infra::fs::{absolute_path, expand_path, is_directory};
use crate::infra::t;
use crate::resolve_locale;

/// Options shared by the commands that walk a test case directory.
/// 遍历测试用例目录的命令所共享的选项。
#[derive(Debug, Clone, Default)]
pub struct SelectionOptions {
    /// Explicit test case directory / 显式指定的测试用例目录
    pub dir: Option<PathBuf>,
    /// Executor configuration file / 执行器配置文件
    pub config: Option<PathBuf>,
    /// Load the configuration for its directory and language only.
    /// 仅为目录和语言加载配置。
    pub no_config: bool,
}

/// What a command needs after its options have been resolved.
/// 命令选项解析完成后所需的内容。
#[derive(Debug)]
pub struct PreparedSelection {
    pub root: PathBuf,
    /// The configuration to consider, `None` when running unconfigured.
    /// 要考虑的配置，不使用配置运行时为 `None`。
    pub config: Option<ExecutorConfig>,
    pub locale: String,
}

/// Loads the configuration (if any), switches to its language and works out
/// which directory to search.
///
/// The configuration is `--config` when given, otherwise `gatf-config.toml`
/// in the working directory if it exists. The directory is `--dir` when
/// given, otherwise the configured `test_case_dir`, otherwise the current
/// directory.
///
/// 加载配置（如果有），切换到其语言，并确定要搜索的目录。
/// 配置优先使用 `--config`，否则在工作目录中存在 `gatf-config.toml` 时使用它。
/// 目录优先使用 `--dir`，其次是配置的 `test_case_dir`，最后是当前目录。
pub fn prepare_selection(options: &SelectionOptions, locale: &str) -> Result<PreparedSelection> {
    let mut locale = locale.to_string();
    let mut loaded: Option<(ExecutorConfig, PathBuf)> = None;

    // Without `--config`, a default config file in the working directory is used when present.
    let config_arg = options.config.clone().or_else(|| {
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        default_path.is_file().then_some(default_path)
    });

    if let Some(config_arg) = &config_arg {
        let (config, config_path) = load_config(config_arg)?;
        locale = resolve_locale(&config.language).to_string();
        rust_i18n::set_locale(&locale);
        println!(
            "{}",
            t!("run.loading_config", locale = &locale, path = config_path.display())
        );
        loaded = Some((config, config_path));
    }

    let root = match (&options.dir, &loaded) {
        (Some(dir), _) => expand_path(&dir.to_string_lossy())?,
        (None, Some((config, config_path))) => {
            let config_dir = config_path.parent().unwrap_or(Path::new("."));
            config
                .resolve_test_case_dir(config_dir)?
                .unwrap_or_else(|| PathBuf::from("."))
        }
        (None, None) => PathBuf::from("."),
    };
    let root = absolute_path(&root).unwrap_or(root);

    println!(
        "{}",
        t!("run.searching_dir", locale = &locale, path = root.display())
    );
    if !is_directory(&root) {
        println!(
            "{}",
            t!("run.not_a_directory", locale = &locale, path = root.display()).yellow()
        );
    }

    let config = match loaded {
        Some((config, _)) if !options.no_config => Some(config),
        Some(_) => {
            println!("{}", t!("run.config_not_considered", locale = &locale).cyan());
            None
        }
        None => None,
    };

    Ok(PreparedSelection {
        root,
        config,
        locale,
    })
}
