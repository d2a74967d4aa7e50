use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_describes_the_tool() {
    let mut cmd = Command::cargo_bin("movisort").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MoVi"))
        .stdout(predicate::str::contains("--verify"))
        .stdout(predicate::str::contains("--dry"));
}

#[test]
fn test_verify_fails_on_incomplete_layout() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("dataset");
    let inbox = base.path().join("inbox");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&inbox).unwrap();

    let config_path = base.path().join("movi.yaml");
    fs::write(
        &config_path,
        format!("root: {}\ninbox: {}\n", root.display(), inbox.display()),
    )
    .unwrap();

    let log_file = base.path().join("movi_sort.log");

    let mut cmd = Command::cargo_bin("movisort").unwrap();
    cmd.arg("-c")
        .arg(&config_path)
        .arg("-L")
        .arg("-l")
        .arg(&log_file)
        .arg("--verify")
        .assert()
        .failure()
        .stdout(predicate::str::contains("MISSING"));
}

#[test]
fn test_organize_moves_a_video() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("dataset");
    let inbox = base.path().join("inbox");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&inbox).unwrap();
    fs::write(inbox.join("F_PG1_Subject_9_L.avi"), b"avi").unwrap();

    let config_path = base.path().join("movi.yaml");
    fs::write(
        &config_path,
        format!("root: {}\ninbox: {}\n", root.display(), inbox.display()),
    )
    .unwrap();

    let log_file = base.path().join("movi_sort.log");

    let mut cmd = Command::cargo_bin("movisort").unwrap();
    cmd.arg("-c")
        .arg(&config_path)
        .arg("-L")
        .arg("-l")
        .arg(&log_file)
        .assert()
        .success();

    assert!(root.join("Videos/F_PG1_Subject_9_L.avi").is_file());
    assert!(!inbox.join("F_PG1_Subject_9_L.avi").exists());
}
