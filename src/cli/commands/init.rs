//! # Configuration Initialization Module / 配置初始化模块
//!
//! This module creates a starter executor configuration, either through a
//! short interactive wizard or non-interactively with default values.
//!
//! 此模块通过简短的交互式向导或使用默认值以非交互方式创建初始执行器配置。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Prompts for the test case directory, base URL and ordering
//! - **Overwrite Protection**: Confirmation prompt before overwriting an existing file
//!
//! - **交互式向导**: 提示输入测试用例目录、基础 URL 和排序方式
//! - **覆盖保护**: 覆盖现有文件前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::fs;
use std::path::Path;

use crate::engine::config::ExecutorConfig;
use crate::infra::t;

/// Runs the wizard and writes the configuration to `config_path`.
///
/// In non-interactive mode the starter configuration is written as-is,
/// replacing any existing file.
///
/// 运行向导并将配置写入 `config_path`。
/// 非交互模式下直接写入初始配置，并替换任何现有文件。
pub fn run_init_wizard(config_path: &Path, language: &str, non_interactive: bool) -> Result<()> {
    let mut config = ExecutorConfig {
        language: language.to_string(),
        ..ExecutorConfig::starter()
    };

    if non_interactive {
        return write_config(config_path, &config, language);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.welcome", locale = language).cyan().bold());

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", locale = language, path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let test_case_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init.dir_prompt", locale = language))
        .default(config.test_case_dir.clone().unwrap_or_default())
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;
    let base_url: String = Input::with_theme(&theme)
        .with_prompt(t!("init.base_url_prompt", locale = language))
        .default(config.base_url.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;
    let order_by_file_name = Confirm::with_theme(&theme)
        .with_prompt(t!("init.order_prompt", locale = language))
        .default(config.order_by_file_name)
        .interact()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    config.test_case_dir = Some(test_case_dir);
    config.base_url = Some(base_url).filter(|url| !url.trim().is_empty());
    config.order_by_file_name = order_by_file_name;

    write_config(config_path, &config, language)
}

fn write_config(config_path: &Path, config: &ExecutorConfig, language: &str) -> Result<()> {
    let content = config.to_toml()?;
    fs::write(config_path, content)
        .with_context(|| t!("init.write_failed", locale = language, path = config_path.display()).to_string())?;
    println!(
        "{}",
        t!("init.success", locale = language, path = config_path.display()).green()
    );
    Ok(())
}
