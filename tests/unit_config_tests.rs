//! # Configuration Unit Tests / 配置单元测试
//!
//! Loading executor configuration files from disk: valid, partial, malformed
//! and missing files.

mod common;

use case_finder::config::{load_config, ExecutorConfig};
use common::{setup_test_tree, write_config, write_file};

#[test]
fn test_load_full_config() {
    let dir = setup_test_tree();
    let path = write_config(
        dir.path(),
        r#"
language = "zh-CN"
test_case_dir = "./cases"
base_url = "http://localhost:9090"
order_by_file_name = true
ordered_files = ["login.json", "logout.json"]
ignore_files = ["*.bak", "draft*"]
concurrent_user_simulation_num = 3
compare_base_urls_num = 2
"#,
    );

    let (config, config_path) = load_config(&path).unwrap();

    assert_eq!(config.language, "zh-CN");
    assert_eq!(config.test_case_dir.as_deref(), Some("./cases"));
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:9090"));
    assert!(config.order_by_file_name);
    assert_eq!(
        config.ordered_files,
        Some(vec!["login.json".to_string(), "logout.json".to_string()])
    );
    assert_eq!(config.ignore_files.as_ref().map(Vec::len), Some(2));
    assert_eq!(config.run_count(), 2);
    assert!(config_path.is_absolute());
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = setup_test_tree();
    let path = write_config(dir.path(), "base_url = \"http://example.test\"\n");

    let (config, _) = load_config(&path).unwrap();

    assert_eq!(
        config,
        ExecutorConfig {
            base_url: Some("http://example.test".to_string()),
            ..ExecutorConfig::default()
        }
    );
    assert_eq!(config.run_count(), 0);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = setup_test_tree();
    let path = write_config(dir.path(), "order_by_file_name = [not toml");

    assert!(load_config(&path).is_err());
}

#[test]
fn test_wrong_field_type_is_an_error() {
    let dir = setup_test_tree();
    let path = write_config(dir.path(), "concurrent_user_simulation_num = \"many\"\n");

    assert!(load_config(&path).is_err());
}

#[test]
fn test_missing_config_is_an_error() {
    let dir = setup_test_tree();

    assert!(load_config(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_relative_test_case_dir_resolves_next_to_config() {
    let dir = setup_test_tree();
    write_file(dir.path(), "cases/login.json", "[]");
    let path = write_config(dir.path(), "test_case_dir = \"cases\"\n");

    let (config, config_path) = load_config(&path).unwrap();
    let resolved = config
        .resolve_test_case_dir(config_path.parent().unwrap())
        .unwrap()
        .unwrap();

    assert!(resolved.is_dir());
    assert!(resolved.ends_with("cases"));
}

#[test]
fn test_starter_config_loads_back() {
    let dir = setup_test_tree();
    let starter = ExecutorConfig::starter();
    let path = write_config(dir.path(), &starter.to_toml().unwrap());

    let (config, _) = load_config(&path).unwrap();

    assert_eq!(config, starter);
}
