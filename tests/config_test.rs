use std::fs;

use movi_sort::config::{load_config, load_config_for_testing, write_default_config};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("movi.yaml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_with_string_paths() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        "root: /data/movi\ninbox: /data/movi_inbox\n",
    );

    let config = load_config_for_testing(config_path).unwrap();
    assert_eq!(config.root.to_str().unwrap(), "/data/movi");
    assert_eq!(config.inbox.to_str().unwrap(), "/data/movi_inbox");
    assert!(!config.copy);
    assert!(config.ignore.is_empty());
}

#[test]
fn test_load_config_with_segmented_paths() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        "root:\n  - /data\n  - movi\ninbox:\n  - /data\n  - inbox\ncopy: true\n",
    );

    let config = load_config_for_testing(config_path).unwrap();
    assert_eq!(config.root.to_str().unwrap(), "/data/movi");
    assert_eq!(config.inbox.to_str().unwrap(), "/data/inbox");
    assert!(config.copy);
}

#[test]
fn test_load_config_expands_env_vars() {
    let dir = TempDir::new().unwrap();
    unsafe { std::env::set_var("MOVI_CONFIG_TEST_ROOT", "/srv/datasets") };
    let config_path = write_config(
        &dir,
        "root: $MOVI_CONFIG_TEST_ROOT/movi\ninbox: $MOVI_CONFIG_TEST_ROOT/inbox\n",
    );

    let config = load_config_for_testing(config_path).unwrap();
    assert_eq!(config.root.to_str().unwrap(), "/srv/datasets/movi");
}

#[test]
fn test_config_rejects_matching_root_and_inbox() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "root: /data/movi\ninbox: /data/movi\n");

    let result = load_config_for_testing(config_path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must differ from the dataset root")
    );
}

#[test]
fn test_config_rejects_invalid_ignore_pattern() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        "root: /data/movi\ninbox: /data/inbox\nignore:\n  - '['\n",
    );

    let result = load_config_for_testing(config_path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Invalid glob pattern: [")
    );
}

#[test]
fn test_load_config_checks_paths() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        "root: /definitely/not/a/real/path\ninbox: /also/not/real\n",
    );

    let result = load_config(config_path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Directory not found: /definitely/not/a/real/path")
    );
}

#[test]
fn test_starter_config_is_loadable() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("fresh/movi.yaml");

    write_default_config(&config_path).unwrap();

    let config = load_config_for_testing(config_path).unwrap();
    assert!(config.root.ends_with("MoVi"));
    assert!(config.inbox.ends_with("inbox"));
    assert!(!config.copy);
    assert_eq!(config.ignore, vec!["*.md5".to_string()]);
}

#[test]
fn test_load_config_rejects_bad_yaml() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "root: [unterminated\n");

    let result = load_config_for_testing(config_path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("not valid YAML")
    );
}
