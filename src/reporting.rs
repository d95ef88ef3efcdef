//! # Reporting Module / 报告模块
//!
//! This module handles the display and export of discovery results.
//! It prints colorful, formatted summaries to the console with
//! internationalization support, and writes machine-readable JSON reports.
//!
//! 此模块处理发现结果的显示和导出。
//! 它在控制台打印彩色格式化摘要（支持国际化），并写入机器可读的 JSON 报告。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_failure_details, print_plan, print_registrations, print_summary};
pub use json::write_json_report;
