//! # File Selection Module / 文件选择模块
//!
//! This module turns the raw traversal output into the ordered, filtered list
//! of files to resolve: explicit declared order or alphanumeric name order,
//! followed by ignore-pattern exclusion. Selection only ever reorders or
//! removes files, it never adds one.
//!
//! 此模块将原始遍历结果转换为待解析的有序、已过滤文件列表：
//! 先按显式声明的顺序或字母数字名称顺序排序，然后按忽略模式排除。
//! 选择只会重新排序或移除文件，从不添加文件。

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::engine::config::ExecutorConfig;
use crate::infra::fs::file_name_of;

/// Represents the selection outcome for one discovery run.
/// 表示一次发现运行的选择结果。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionPlan {
    /// The files to resolve, in processing order.
    /// 待解析的文件，按处理顺序排列。
    pub files: Vec<PathBuf>,
    /// The number of files found by traversal.
    /// 遍历找到的文件数量。
    pub discovered_count: usize,
    /// Files dropped by ignore patterns, in candidate order.
    /// 被忽略模式排除的文件，按候选顺序排列。
    pub ignored: Vec<PathBuf>,
    /// Whether a `*` or `*.*` pattern excluded everything.
    /// 是否有 `*` 或 `*.*` 模式排除了所有文件。
    pub ignore_all: bool,
}

/// Creates the selection plan for the files found by traversal.
///
/// Passing `None` for `config` is the unconfigured path: every discovered file
/// is kept in traversal order and no ignore rule applies.
///
/// 为遍历找到的文件创建选择计划。
/// `config` 为 `None` 时不使用配置：所有发现的文件按遍历顺序保留，且不应用任何忽略规则。
///
/// # Arguments / 参数
/// * `discovered` - Files in traversal order / 按遍历顺序排列的文件
/// * `config` - The configuration to consider, if any / 要考虑的配置（如果有）
pub fn plan_selection(discovered: Vec<PathBuf>, config: Option<&ExecutorConfig>) -> SelectionPlan {
    let discovered_count = discovered.len();

    let Some(config) = config else {
        return SelectionPlan {
            files: discovered,
            discovered_count,
            ..SelectionPlan::default()
        };
    };

    let candidates = match &config.ordered_files {
        Some(declared) => order_by_declaration(discovered, declared),
        None => {
            let mut files = discovered;
            if config.order_by_file_name {
                sort_by_file_name(&mut files);
            }
            files
        }
    };

    let rules = IgnoreRules::from_patterns(config.ignore_files.as_deref().unwrap_or_default());
    if rules.ignore_all {
        return SelectionPlan {
            files: Vec::new(),
            discovered_count,
            ignored: candidates,
            ignore_all: true,
        };
    }

    let (files, ignored): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|file| !rules.is_ignored(&file_name_of(file)));

    SelectionPlan {
        files,
        discovered_count,
        ignored,
        ignore_all: false,
    }
}

/// Places the files named in `declared` first, in declaration order, then
/// every remaining file in traversal order.
///
/// For each declared name the first file in traversal order with exactly that
/// name is chosen; a file is placed at most once.
///
/// 先按声明顺序放置 `declared` 中命名的文件，然后按遍历顺序放置其余文件。
/// 对每个声明的名称，选择遍历顺序中第一个名称完全相同的文件；每个文件最多放置一次。
pub fn order_by_declaration(files: Vec<PathBuf>, declared: &[String]) -> Vec<PathBuf> {
    let names: Vec<String> = files.iter().map(|f| file_name_of(f)).collect();
    let mut placed = vec![false; files.len()];
    let mut order = Vec::with_capacity(files.len());

    for wanted in declared {
        if let Some(idx) = names.iter().position(|name| name == wanted) {
            if !placed[idx] {
                placed[idx] = true;
                order.push(idx);
            }
        }
    }
    order.extend((0..files.len()).filter(|idx| !placed[*idx]));

    let mut slots: Vec<Option<PathBuf>> = files.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}

/// Sorts files by name with [`alphanum_cmp`]. The sort is stable, so files
/// with identical names keep their traversal order.
///
/// Only the final path component is compared, never the parent directories,
/// so files from different subdirectories interleave by name: `b/case2.json`
/// sorts before `a/case10.json`.
///
/// 使用 [`alphanum_cmp`] 按名称对文件排序。排序是稳定的，
/// 因此同名文件保持其遍历顺序。
/// 只比较路径的最后一个组成部分而不比较父目录，因此不同子目录中的文件会按名称交错排列：
/// `b/case2.json` 排在 `a/case10.json` 之前。
pub fn sort_by_file_name(files: &mut [PathBuf]) {
    files.sort_by_cached_key(|file| AlphanumKey(file_name_of(file)));
}

#[derive(PartialEq, Eq)]
struct AlphanumKey(String);

impl PartialOrd for AlphanumKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlphanumKey {
    fn cmp(&self, other: &Self) -> Ordering {
        alphanum_cmp(&self.0, &other.0)
    }
}

/// Compares two strings in natural order: runs of ASCII digits compare by
/// numeric value, everything else compares lexically.
///
/// `file2` sorts before `file10`. Numeric runs equal in value but differing in
/// leading zeros order the shorter run first, keeping the order total.
///
/// 以自然顺序比较两个字符串：ASCII 数字串按数值比较，其他部分按字典序比较。
/// `file2` 排在 `file10` 之前。
pub fn alphanum_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a, b);

    while !a.is_empty() && !b.is_empty() {
        let (chunk_a, rest_a) = next_chunk(a);
        let (chunk_b, rest_b) = next_chunk(b);

        let ordering = if is_numeric(chunk_a) && is_numeric(chunk_b) {
            compare_numeric(chunk_a, chunk_b)
        } else {
            chunk_a.cmp(chunk_b)
        };
        if ordering != Ordering::Equal {
            return ordering;
        }

        a = rest_a;
        b = rest_b;
    }

    a.len().cmp(&b.len())
}

/// Splits off the leading run of digits or non-digits. `s` must be non-empty.
fn next_chunk(s: &str) -> (&str, &str) {
    let numeric = is_numeric(s);
    let end = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() != numeric)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    s.split_at(end)
}

fn is_numeric(chunk: &str) -> bool {
    chunk.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let trimmed_a = a.trim_start_matches('0');
    let trimmed_b = b.trim_start_matches('0');
    trimmed_a
        .len()
        .cmp(&trimmed_b.len())
        .then_with(|| trimmed_a.cmp(trimmed_b))
        .then_with(|| a.len().cmp(&b.len()))
}

/// A single parsed ignore pattern.
/// 单个已解析的忽略模式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreRule {
    /// `*.ext`: the name ends with the pattern minus its first two characters.
    /// `*.ext`：文件名以去掉前两个字符后的模式结尾。
    Extension(String),
    /// `prefix*`: the name starts with the pattern up to its last `*`.
    /// `prefix*`：文件名以模式中最后一个 `*` 之前的部分开头。
    Prefix(String),
    /// `*suffix`: the name ends with the pattern minus its leading `*`.
    /// `*suffix`：文件名以去掉开头 `*` 的模式结尾。
    Suffix(String),
    /// Anything else: the name equals the pattern.
    /// 其他情况：文件名与模式完全相同。
    Exact(String),
}

impl IgnoreRule {
    /// Parses a pattern after trimming whitespace. Empty patterns yield `None`.
    /// 去除空白后解析模式。空模式返回 `None`。
    pub fn parse(pattern: &str) -> Option<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return None;
        }

        let rule = if let Some(rest) = pattern.strip_prefix("*.") {
            IgnoreRule::Extension(rest.to_string())
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            IgnoreRule::Prefix(prefix.to_string())
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            IgnoreRule::Suffix(suffix.to_string())
        } else {
            IgnoreRule::Exact(pattern.to_string())
        };
        Some(rule)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            IgnoreRule::Extension(ext) => file_name.ends_with(ext.as_str()),
            IgnoreRule::Prefix(prefix) => file_name.starts_with(prefix.as_str()),
            IgnoreRule::Suffix(suffix) => file_name.ends_with(suffix.as_str()),
            IgnoreRule::Exact(name) => file_name == name,
        }
    }
}

/// The full set of ignore rules from a configuration.
/// 来自配置的完整忽略规则集。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    pub rules: Vec<IgnoreRule>,
    /// Set when a pattern is exactly `*` or `*.*` after trimming.
    /// 当某个模式去除空白后恰好为 `*` 或 `*.*` 时设置。
    pub ignore_all: bool,
}

impl IgnoreRules {
    pub fn from_patterns(patterns: &[String]) -> Self {
        let ignore_all = patterns
            .iter()
            .map(|p| p.trim())
            .any(|p| p == "*" || p == "*.*");
        let rules = patterns.iter().filter_map(|p| IgnoreRule::parse(p)).collect();
        Self { rules, ignore_all }
    }

    /// Checks whether any rule excludes `file_name`.
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignore_all || self.rules.iter().any(|rule| rule.matches(file_name))
    }
}
