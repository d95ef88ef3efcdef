//! # Find Command Module / 查找命令模块
//!
//! This module implements the `find` command, which discovers and resolves
//! the JSON test cases of a directory tree and reports on them.
//!
//! 此模块实现 `find` 命令，它发现并解析目录树中的 JSON 测试用例并生成报告。

use anyhow::{bail, Result};
use colored::*;
use std::path::PathBuf;

use crate::engine::finder::{ExecutionContext, TestCaseFinder};
use crate::engine::models::Discovery;
use crate::engine::resolver::{JsonTestCaseResolver, TestCaseResolver};
use crate::infra::t;
use crate::reporting::{print_failure_details, print_registrations, print_summary, write_json_report};

use super::{prepare_selection, SelectionOptions};

/// Executes the find command with the provided arguments.
///
/// # Arguments
/// * `options` - Directory and configuration selection
/// * `json` - Optional path for a JSON report
/// * `strict` - Fail when any file could not be resolved
/// * `locale` - Language used until a configuration overrides it
pub fn execute(
    options: SelectionOptions,
    json: Option<PathBuf>,
    strict: bool,
    locale: &str,
) -> Result<()> {
    let prepared = prepare_selection(&options, locale)?;
    let locale = prepared.locale.as_str();
    let finder = TestCaseFinder::new(JsonTestCaseResolver);

    let (discovery, context) = match prepared.config {
        Some(config) => {
            let mut context = ExecutionContext::new(config);
            let discovery = finder.find_test_cases(&prepared.root, Some(&mut context), true);
            (discovery, Some(context))
        }
        None => (finder.find_test_cases(&prepared.root, None, false), None),
    };

    print_summary(&discovery, locale);
    print_failure_details(&discovery.failures, locale);
    if let Some(context) = &context {
        print_registrations(context.results(), locale);
    }

    if let Some(report_path) = &json {
        println!(
            "\n{}",
            t!("report.writing_json", locale = locale, path = report_path.display())
        );
        if let Err(e) =
            write_json_report(&discovery, &prepared.root, finder.resolver().file_type(), report_path)
        {
            eprintln!("{} {:#}", t!("report.json_failed", locale = locale).red(), e);
        }
    }

    finish(&discovery, strict, locale)
}

fn finish(discovery: &Discovery, strict: bool, locale: &str) -> Result<()> {
    if discovery.is_clean() {
        println!("\n{}", t!("find.all_resolved", locale = locale).green().bold());
        return Ok(());
    }

    if strict {
        bail!(
            "{}",
            t!("find.strict_failed", locale = locale, count = discovery.failures.len())
        );
    }
    println!(
        "\n{}",
        t!("find.partial", locale = locale, count = discovery.failures.len()).yellow()
    );
    Ok(())
}
