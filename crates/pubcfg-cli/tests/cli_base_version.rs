use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn pubcfg_cmd() -> Command {
    Command::cargo_bin("pubcfg").unwrap()
}

#[test]
fn test_base_version_of_argument() {
    pubcfg_cmd()
        .args(["base-version", "2.3.1-SNAPSHOT"])
        .assert()
        .success()
        .stdout("2.3.1\n");

    pubcfg_cmd()
        .args(["base-version", "1.2.3.4"])
        .assert()
        .success()
        .stdout("1.2.3\n");

    pubcfg_cmd()
        .args(["base-version", "1.2.3"])
        .assert()
        .success()
        .stdout("1.2.3\n");
}

#[test]
fn test_base_version_of_empty_argument_fails() {
    pubcfg_cmd()
        .args(["base-version", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("version is empty"));
}

#[test]
fn test_base_version_from_settings() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Publishing.toml"),
        "version = \"5.0.0.v20240101\"\n",
    )
    .unwrap();

    pubcfg_cmd()
        .current_dir(tmp.path())
        .args(["base-version"])
        .assert()
        .success()
        .stdout("5.0.0\n");
}

#[test]
fn test_base_version_without_configured_version_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Publishing.toml"), "branch = \"main\"\n").unwrap();

    pubcfg_cmd()
        .current_dir(tmp.path())
        .args(["base-version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("version is not set"));
}
