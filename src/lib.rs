//! # Case Finder Library / Case Finder 库
//!
//! This library provides the core functionality for the Case Finder tool,
//! which discovers acceptance test case files in a directory tree, orders and
//! filters them according to an optional executor configuration, and resolves
//! each surviving file into test case records.
//!
//! 此库为 Case Finder 工具提供核心功能，
//! 它在目录树中发现验收测试用例文件，根据可选的执行器配置对其进行排序和过滤，
//! 并将每个保留的文件解析为测试用例记录。
//!
//! ## Modules / 模块
//!
//! - `engine` - Data models, configuration, selection rules and the finder itself
//! - `infra` - Infrastructure services like directory traversal and path handling
//! - `reporting` - Console and JSON reports of a discovery run
//! - `cli` - Command-line interface and commands
//!
//! - `engine` - 数据模型、配置、选择规则以及查找器本身
//! - `infra` - 基础设施服务，如目录遍历和路径处理
//! - `reporting` - 发现结果的控制台和 JSON 报告
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod engine;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use engine::config;
pub use engine::finder;
pub use engine::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(resolve_locale(&locale));
}

/// Maps a requested locale onto one of the bundled translations.
/// 将请求的语言区域映射到内置翻译之一。
pub fn resolve_locale(requested: &str) -> &'static str {
    let available_locales = rust_i18n::available_locales!();

    // Full match first ("zh-CN"), then the language part ("en" from "en-US").
    if let Some(found) = available_locales.iter().find(|l| **l == requested) {
        return *found;
    }
    requested
        .split('-')
        .next()
        .and_then(|lang_code| {
            available_locales
                .iter()
                .find(|l| **l == lang_code || l.split('-').next() == Some(lang_code))
        })
        .copied()
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
