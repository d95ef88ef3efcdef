//! # Test Case Resolver Module / 测试用例解析器模块
//!
//! A resolver turns one test case file into test case records. There is one
//! resolver per file format; the finder is generic over this trait and never
//! inspects the format itself.
//!
//! 解析器将一个测试用例文件转换为测试用例记录。每种文件格式对应一个解析器；
//! 查找器对此 trait 是泛型的，从不自行检查格式。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::engine::models::{FileType, TestCase};

/// Format-specific conversion of a single file into test cases.
/// 将单个文件转换为测试用例的特定格式实现。
pub trait TestCaseResolver {
    /// The file format this resolver handles. Traversal selects files by its suffix.
    /// 此解析器处理的文件格式。遍历按其后缀选择文件。
    fn file_type(&self) -> FileType;

    /// Resolves `path` into test cases, in file order. An empty vector means
    /// the file holds no recognizable cases.
    ///
    /// 将 `path` 解析为按文件顺序排列的测试用例。空向量表示文件中没有可识别的用例。
    fn resolve(&self, path: &Path) -> Result<Vec<TestCase>>;
}

/// Resolves `.json` files holding an array of test case objects. An empty
/// file or `null` resolves to no cases.
///
/// 解析包含测试用例对象数组的 `.json` 文件。空文件或 `null` 解析为零个用例。
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTestCaseResolver;

impl TestCaseResolver for JsonTestCaseResolver {
    fn file_type(&self) -> FileType {
        FileType::Json
    }

    fn resolve(&self, path: &Path) -> Result<Vec<TestCase>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read test case file: {}", path.display()))?;
        // A blank file or a literal `null` holds no cases.
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let cases: Option<Vec<TestCase>> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse test case file: {}", path.display()))?;
        Ok(cases.unwrap_or_default())
    }
}
