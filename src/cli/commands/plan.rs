//! # Plan Command Module / 计划命令模块
//!
//! Implements the `plan` command: shows which files of a given format would
//! be resolved, and in which order, without resolving any of them.
//!
//! 实现 `plan` 命令：显示给定格式的哪些文件将被解析以及解析顺序，但不解析任何文件。

use anyhow::Result;

use crate::engine::finder::plan_directory;
use crate::engine::models::FileType;
use crate::reporting::print_plan;

use super::{prepare_selection, SelectionOptions};

/// Executes the plan command.
///
/// # Arguments
/// * `options` - Directory and configuration selection
/// * `file_type` - The test case format to select
/// * `locale` - Language used until a configuration overrides it
pub fn execute(options: SelectionOptions, file_type: FileType, locale: &str) -> Result<()> {
    let prepared = prepare_selection(&options, locale)?;
    let plan = plan_directory(&prepared.root, file_type, prepared.config.as_ref());
    print_plan(&plan, file_type, &prepared.locale);
    Ok(())
}
