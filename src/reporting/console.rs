//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints discovery results to the console: the resolved test
//! cases, the files that failed to resolve, the results-holder registrations
//! and selection plans.
//!
//! 此模块将发现结果打印到控制台：已解析的测试用例、解析失败的文件、
//! 结果持有者注册情况以及选择计划。

use colored::*;

use crate::engine::models::{Discovery, FileFailure, FileType, ResultsHolders};
use crate::engine::selection::SelectionPlan;
use crate::infra::t;

/// Prints a formatted summary of the resolved test cases.
///
/// 在控制台打印已解析测试用例的格式化摘要。
///
/// # Arguments / 参数
/// * `discovery` - The discovery outcome to summarize
///                 要总结的发现结果
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Discovered Test Cases ---
///   - Source File          | Test Case                      | Sim | Base URL
///   - login.json           | login-ok                       |   0 | http://localhost:8080
/// ```
pub fn print_summary(discovery: &Discovery, locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    if discovery.test_cases.is_empty() {
        println!("  {}", t!("report.no_test_cases", locale = locale).dimmed());
        return;
    }

    println!(
        "  - {:<20} | {:<30} | {:>3} | {}",
        t!("report.column_source", locale = locale),
        t!("report.column_name", locale = locale),
        t!("report.column_simulation", locale = locale),
        t!("report.column_base_url", locale = locale),
    );
    for case in &discovery.test_cases {
        println!(
            "  - {:<20} | {:<30} | {:>3} | {}",
            case.source_file_name.as_deref().unwrap_or("").cyan(),
            case.name,
            case.simulation_number.unwrap_or(0),
            case.base_url.as_deref().unwrap_or("-").dimmed()
        );
    }

    println!(
        "\n{}",
        t!(
            "report.summary_counts",
            locale = locale,
            cases = discovery.test_cases.len(),
            files = discovery.source_files().len(),
            failures = discovery.failures.len()
        )
        .green()
    );
}

/// Prints the files that failed to resolve and why.
/// Returns early if there are none.
///
/// 打印解析失败的文件及原因。如果没有则提前返回。
pub fn print_failure_details(failures: &[FileFailure], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("report.failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, failure) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {}",
            i + 1,
            failures.len(),
            failure.file.display().to_string().cyan()
        );
        println!("    {}", failure.cause);
    }
    println!("{}", "-".repeat(80));
}

/// Prints the run counts registered per source file.
/// 打印每个源文件注册的运行次数。
pub fn print_registrations(results: &ResultsHolders, locale: &str) {
    if results.is_empty() {
        return;
    }

    println!("\n{}", t!("report.registrations_banner", locale = locale).bold());
    for registration in results.registrations() {
        println!(
            "  - {:<30} {}",
            registration.source_file,
            t!("report.runs", locale = locale, runs = registration.runs).yellow()
        );
    }
}

/// Prints the files a selection plan would resolve, in processing order.
/// 按处理顺序打印选择计划将要解析的文件。
pub fn print_plan(plan: &SelectionPlan, file_type: FileType, locale: &str) {
    println!(
        "\n{}",
        t!("plan.banner", locale = locale, file_type = file_type.ext()).bold()
    );

    for (i, file) in plan.files.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, file.display());
    }

    if plan.ignore_all {
        println!("{}", t!("plan.ignore_all", locale = locale).yellow());
    } else {
        for file in &plan.ignored {
            println!(
                "  {} {}",
                "x".red(),
                t!("plan.ignored_file", locale = locale, path = file.display()).dimmed()
            );
        }
    }

    println!(
        "\n{}",
        t!(
            "plan.counts",
            locale = locale,
            discovered = plan.discovered_count,
            selected = plan.files.len(),
            ignored = plan.ignored.len()
        )
        .green()
    );
}
