//! # Test Case Finder Module / 测试用例查找器模块
//!
//! This module ties traversal, selection and resolution together. It walks a
//! test case directory, applies the configured ordering and ignore rules,
//! resolves each surviving file with a format-specific resolver and stamps the
//! cross-cutting fields on every record.
//!
//! A file that fails to resolve is logged, recorded in [`Discovery::failures`]
//! and skipped; it never stops the rest of the batch.
//!
//! 此模块将遍历、选择和解析结合在一起。它遍历测试用例目录，应用配置的排序和忽略规则，
//! 使用特定格式的解析器解析每个保留的文件，并在每条记录上写入横切字段。
//!
//! 解析失败的文件会被记录到日志和 [`Discovery::failures`] 中并被跳过；
//! 它永远不会中断批次中其余文件的处理。

use colored::*;
use std::path::Path;

use crate::engine::config::ExecutorConfig;
use crate::engine::models::{Discovery, FileFailure, FileType, ResultsHolders};
use crate::engine::resolver::TestCaseResolver;
use crate::engine::selection::{plan_selection, SelectionPlan};
use crate::infra::fs::{collect_test_case_files, file_name_of, is_directory};
use crate::infra::t;

/// The surroundings a discovery run reads configuration from and registers
/// expected runs with.
///
/// 发现运行读取配置并注册预期运行次数的上下文。
pub trait FinderContext {
    fn config(&self) -> &ExecutorConfig;

    /// Registers the expected number of runs for a resolved source file.
    /// 为已解析的源文件注册预期运行次数。
    fn initialize_results_holders(&mut self, runs: u32, source_file: &str);
}

/// The standard [`FinderContext`]: an owned configuration plus the results
/// holders it fills.
///
/// 标准的 [`FinderContext`]：持有的配置以及由其填充的结果持有者。
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    config: ExecutorConfig,
    results: ResultsHolders,
}

impl ExecutionContext {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            config,
            results: ResultsHolders::new(),
        }
    }

    pub fn results(&self) -> &ResultsHolders {
        &self.results
    }
}

impl FinderContext for ExecutionContext {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn initialize_results_holders(&mut self, runs: u32, source_file: &str) {
        self.results.register(runs, source_file);
    }
}

/// Walks `dir` for files of `file_type` and applies the selection rules of
/// `config`. A `dir` that is not a directory yields an empty plan.
///
/// 遍历 `dir` 查找 `file_type` 类型的文件，并应用 `config` 的选择规则。
pub fn plan_directory(
    dir: &Path,
    file_type: FileType,
    config: Option<&ExecutorConfig>,
) -> SelectionPlan {
    if !is_directory(dir) {
        return SelectionPlan::default();
    }
    let files = collect_test_case_files(dir, file_type);
    plan_selection(files, config)
}

/// Finds the test cases of one file format inside a directory tree.
/// 在目录树中查找某一种文件格式的测试用例。
#[derive(Debug, Clone, Default)]
pub struct TestCaseFinder<R> {
    resolver: R,
}

impl<R: TestCaseResolver> TestCaseFinder<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Walks `dir` and plans which files to resolve, without resolving them.
    ///
    /// A `dir` that is not a directory yields an empty plan.
    ///
    /// 遍历 `dir` 并计划要解析哪些文件，但不进行解析。
    /// 如果 `dir` 不是目录，则返回空计划。
    pub fn plan(&self, dir: &Path, config: Option<&ExecutorConfig>) -> SelectionPlan {
        plan_directory(dir, self.resolver.file_type(), config)
    }

    /// Discovers, orders, filters and resolves the test cases under `dir`.
    ///
    /// Configuration is only considered when `consider_config` is set and a
    /// `context` is given; otherwise every discovered file is resolved in
    /// traversal order and neither the base URL nor the results holders are
    /// touched.
    ///
    /// 发现、排序、过滤并解析 `dir` 下的测试用例。
    /// 只有在设置了 `consider_config` 且提供了 `context` 时才会考虑配置；
    /// 否则所有发现的文件都按遍历顺序解析，且不会修改基础 URL 或结果持有者。
    ///
    /// # Arguments / 参数
    /// * `dir` - Root of the test case tree / 测试用例树的根目录
    /// * `context` - Configuration and results holders / 配置和结果持有者
    /// * `consider_config` - Whether configuration drives the run / 是否由配置驱动本次运行
    ///
    /// # Returns / 返回值
    /// Every resolved test case in processing order, plus the files that
    /// failed to resolve. / 按处理顺序排列的所有已解析用例，以及解析失败的文件。
    pub fn find_test_cases(
        &self,
        dir: &Path,
        context: Option<&mut dyn FinderContext>,
        consider_config: bool,
    ) -> Discovery {
        let mut context = if consider_config { context } else { None };
        let plan = self.plan(dir, context.as_deref().map(|ctx| ctx.config()));

        let mut discovery = Discovery::default();
        for file in plan.files {
            let mut cases = match self.resolver.resolve(&file) {
                Ok(cases) => cases,
                Err(e) => {
                    let cause = format!("{e:#}");
                    eprintln!(
                        "{}",
                        t!("finder.resolve_failed", file = file.display(), error = &cause).yellow()
                    );
                    discovery.failures.push(FileFailure { file, cause });
                    continue;
                }
            };

            let file_name = file_name_of(&file);
            let base_url = context.as_deref().map(|ctx| ctx.config().base_url.clone());
            for case in &mut cases {
                case.source_file_name = Some(file_name.clone());
                case.simulation_number.get_or_insert(0);
                if let Some(base_url) = &base_url {
                    case.base_url = base_url.clone();
                }
            }

            if let Some(ctx) = context.as_deref_mut() {
                if !cases.is_empty() {
                    let runs = ctx.config().run_count();
                    ctx.initialize_results_holders(runs, &file_name);
                }
            }

            discovery.test_cases.extend(cases);
        }
        discovery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::TestCase;
    use anyhow::{bail, Result};
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records the order files are resolved in.
    struct RecordingResolver {
        seen: RefCell<Vec<String>>,
    }

    impl TestCaseResolver for RecordingResolver {
        fn file_type(&self) -> FileType {
            FileType::Csv
        }

        fn resolve(&self, path: &Path) -> Result<Vec<TestCase>> {
            let name = file_name_of(path);
            self.seen.borrow_mut().push(name.clone());
            if name.starts_with("bad") {
                bail!("unreadable row");
            }
            Ok(vec![TestCase {
                name,
                simulation_number: Some(7).filter(|_| path.ends_with("seven.csv")),
                ..TestCase::default()
            }])
        }
    }

    fn tree(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        dir
    }

    #[test]
    fn not_a_directory_yields_nothing() {
        let finder = TestCaseFinder::new(RecordingResolver { seen: RefCell::default() });
        let discovery = finder.find_test_cases(&PathBuf::from("/no/such/dir"), None, true);
        assert!(discovery.test_cases.is_empty());
        assert!(discovery.is_clean());
    }

    #[test]
    fn failures_are_isolated_and_stamping_applies() {
        let dir = tree(&["a.csv", "bad.csv", "seven.csv"]);
        let finder = TestCaseFinder::new(RecordingResolver { seen: RefCell::default() });
        let mut ctx = ExecutionContext::new(ExecutorConfig {
            order_by_file_name: true,
            base_url: Some("http://api".to_string()),
            concurrent_user_simulation_num: 3,
            ..ExecutorConfig::default()
        });

        let discovery = finder.find_test_cases(dir.path(), Some(&mut ctx), true);

        assert_eq!(*finder.resolver().seen.borrow(), vec!["a.csv", "bad.csv", "seven.csv"]);
        assert_eq!(discovery.failures.len(), 1);
        assert!(discovery.failures[0].cause.contains("unreadable row"));
        assert_eq!(discovery.test_cases.len(), 2);
        assert_eq!(discovery.test_cases[0].simulation_number, Some(0));
        assert_eq!(discovery.test_cases[1].simulation_number, Some(7));
        assert!(discovery
            .test_cases
            .iter()
            .all(|c| c.base_url.as_deref() == Some("http://api")));
        assert_eq!(ctx.results().runs_for("a.csv"), Some(3));
        assert_eq!(ctx.results().runs_for("bad.csv"), None);
    }

    #[test]
    fn context_is_ignored_when_config_not_considered() {
        let dir = tree(&["a.csv"]);
        let finder = TestCaseFinder::new(RecordingResolver { seen: RefCell::default() });
        let mut ctx = ExecutionContext::new(ExecutorConfig {
            ignore_files: Some(vec!["*".to_string()]),
            base_url: Some("http://api".to_string()),
            ..ExecutorConfig::default()
        });

        let discovery = finder.find_test_cases(dir.path(), Some(&mut ctx), false);

        assert_eq!(discovery.test_cases.len(), 1);
        assert_eq!(discovery.test_cases[0].base_url, None);
        assert_eq!(discovery.test_cases[0].source_file_name.as_deref(), Some("a.csv"));
        assert!(ctx.results().is_empty());
    }
}
