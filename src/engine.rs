//! # Engine Module / 引擎模块
//!
//! This module contains the core functionality of Case Finder,
//! including data models, configuration, selection rules and the finder.
//!
//! 此模块包含 Case Finder 的核心功能，
//! 包括数据模型、配置、选择规则和查找器。

pub mod config;
pub mod finder;
pub mod models;
pub mod resolver;
pub mod selection;

// Re-exports
pub use config::ExecutorConfig;
pub use finder::{ExecutionContext, FinderContext, TestCaseFinder};
pub use models::{Discovery, FileFailure, FileType, TestCase};
pub use resolver::{JsonTestCaseResolver, TestCaseResolver};
