//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Case Finder,
//! including directory traversal, path handling and i18n support.
//!
//! 此模块为 Case Finder 提供基础设施服务，
//! 包括目录遍历、路径处理和国际化支持。

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
