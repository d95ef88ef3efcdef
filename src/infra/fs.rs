//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the recursive directory traversal used to find
//! candidate test case files, plus small path helpers.
//!
//! 此模块提供用于查找候选测试用例文件的递归目录遍历，
//! 以及一些路径辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::engine::models::FileType;

/// Recursively collects every file under `dir` whose name passes `filter`.
///
/// Within each directory, matching files are appended in listing order first,
/// then every subdirectory is descended into in listing order. Directories are
/// never filtered by name and never appear in the output. A `dir` that is not
/// a directory, or cannot be listed, contributes nothing.
///
/// Symbolic links to directories are followed. A link that leads back into
/// one of its own ancestors is reported by the walker and skipped.
///
/// 递归收集 `dir` 下所有名称通过 `filter` 的文件。
///
/// 在每个目录中，先按列出顺序追加匹配的文件，然后按列出顺序进入每个子目录。
/// 目录从不按名称过滤，也从不出现在输出中。
/// 如果 `dir` 不是目录或无法列出，则不贡献任何内容。
///
/// # Arguments / 参数
/// * `dir` - Directory to walk / 要遍历的目录
/// * `filter` - Predicate applied to each file name / 应用于每个文件名的谓词
/// * `files` - Output list, appended to in traversal order / 按遍历顺序追加的输出列表
pub fn collect_files<F>(dir: &Path, filter: &F, files: &mut Vec<PathBuf>)
where
    F: Fn(&str) -> bool,
{
    // Stable sort: files keep their listing order and come before subdirectories.
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

    files.extend(
        walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| !entry.file_type().is_dir())
            .filter(|entry| filter(&entry.file_name().to_string_lossy()))
            .map(|entry| entry.into_path()),
    );
}

/// Collects every file of the given test case format under `dir`.
/// 收集 `dir` 下给定测试用例格式的所有文件。
pub fn collect_test_case_files(dir: &Path, file_type: FileType) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_files(dir, &|name: &str| file_type.matches_name(name), &mut files);
    files
}

/// The final component of `path` as a string, or an empty string.
/// `path` 的最后一个组成部分（字符串形式），没有则为空字符串。
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Gets the absolute path from a potentially relative path.
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Expands `~` and environment variables in a user-supplied path.
/// 展开用户提供路径中的 `~` 和环境变量。
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {raw}"))?
        .to_string();
    Ok(PathBuf::from(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_of_handles_root() {
        assert_eq!(file_name_of(Path::new("/a/b/login.json")), "login.json");
        assert_eq!(file_name_of(Path::new("/")), "");
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let files = collect_test_case_files(Path::new("/definitely/not/here/42"), FileType::Json);
        assert!(files.is_empty());
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("cases/api").unwrap(), PathBuf::from("cases/api"));
    }
}
