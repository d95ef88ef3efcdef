//! # Command Line Interface Module / 命令行接口模块
//!
//! Builds the `case-finder` command line, initializes the language before
//! the help texts are rendered and dispatches to the subcommands.
//!
//! 构建 `case-finder` 命令行，在渲染帮助文本之前初始化语言，并分派到各个子命令。

pub mod commands;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::engine::config::DEFAULT_CONFIG_FILE;
use crate::engine::models::FileType;
use crate::infra::t;
use crate::resolve_locale;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
///
/// 预解析命令行参数以查找语言设置，从而在构建完整 CLI 之前初始化 i18n。
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn config_arg(locale: &str) -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("cli.arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn no_config_arg(locale: &str) -> Arg {
    Arg::new("no-config")
        .long("no-config")
        .help(t!("cli.arg_no_config", locale = locale).to_string())
        .action(ArgAction::SetTrue)
}

fn dir_arg(locale: &str) -> Arg {
    Arg::new("dir")
        .short('d')
        .long("dir")
        .help(t!("cli.arg_dir", locale = locale).to_string())
        .value_name("DIR")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("case-finder")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("find")
                .about(t!("cli.cmd_find_about", locale = locale).to_string())
                .arg(dir_arg(locale))
                .arg(config_arg(locale))
                .arg(no_config_arg(locale))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("cli.arg_json", locale = locale).to_string())
                        .value_name("REPORT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help(t!("cli.arg_strict", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("plan")
                .about(t!("cli.cmd_plan_about", locale = locale).to_string())
                .arg(dir_arg(locale))
                .arg(config_arg(locale))
                .arg(no_config_arg(locale))
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .help(t!("cli.arg_type", locale = locale).to_string())
                        .value_name("TYPE")
                        .value_parser(["xml", "json", "csv"])
                        .default_value("json")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("cli.arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn selection_options(matches: &ArgMatches) -> commands::SelectionOptions {
    commands::SelectionOptions {
        dir: matches.get_one::<PathBuf>("dir").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        no_config: matches.get_flag("no-config"),
    }
}

/// Parses the command line and runs the selected subcommand.
/// 解析命令行并运行所选的子命令。
pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = resolve_locale(&pre_parse_language());
    rust_i18n::set_locale(language);

    let matches = build_cli(language).get_matches();

    match matches.subcommand() {
        Some(("find", find_matches)) => {
            let options = selection_options(find_matches);
            let json = find_matches.get_one::<PathBuf>("json").cloned();
            let strict = find_matches.get_flag("strict");
            commands::find::execute(options, json, strict, language)?;
        }
        Some(("plan", plan_matches)) => {
            let options = selection_options(plan_matches);
            let file_type: FileType = plan_matches
                .get_one::<String>("type")
                .map(String::as_str)
                .unwrap_or("json")
                .parse()?;
            commands::plan::execute(options, file_type, language)?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::run_init_wizard(&output, language, non_interactive)?;
        }
        _ => {
            // Clap has already printed the help text.
        }
    }
    Ok(())
}
