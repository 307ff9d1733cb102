#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! None of these tests reach the real endpoint: they cover the paths that
//! stop before a request is sent, or route it to a dead local proxy to
//! exercise the failure exit. Every test runs in its own
//! temporary working directory so `config.json` never leaks between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn gtx(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gtx").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Translate text with Google Translate from the terminal",
        ))
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--reverse"))
        .stdout(predicate::str::contains("--set"));
}

#[test]
fn test_version_displays_version() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_text_prints_prompt_and_succeeds() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please provide text to translate."));

    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_languages_list() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .arg("--languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("French"))
        .stdout(predicate::str::contains("zh-TW"));
}

#[test]
fn test_set_writes_config_in_working_directory() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .args(["-s", "fr", "-t", "de", "--set"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please provide text to translate."))
        .stderr(predicate::str::contains("Default languages set to fr -> de"));

    let contents = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert_eq!(contents, "{\"sourceLang\":\"fr\",\"targetLang\":\"de\"}\n");
}

#[test]
fn test_legacy_set_flag() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .args(["-s", "ja", "-t", "en", "-set"])
        .assert()
        .success();

    let contents = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"sourceLang\":\"ja\""));
    assert!(contents.contains("\"targetLang\":\"en\""));
}

#[test]
fn test_set_with_one_flag_keeps_other_side() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"sourceLang":"en","targetLang":"de"}"#,
    )
    .unwrap();

    gtx(&dir).args(["-s", "fr", "--set"]).assert().success();

    let contents = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert_eq!(contents, "{\"sourceLang\":\"fr\",\"targetLang\":\"de\"}\n");
}

#[test]
fn test_quiet_set_prints_no_status() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .args(["-q", "-s", "fr", "-t", "de", "--set"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_set_failure_is_a_warning() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .args(["--config", "missing/config.json", "-s", "fr", "-t", "de", "--set"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("Please provide text to translate."));
}

#[test]
fn test_custom_config_path() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .args(["--config", "langs.json", "-s", "it", "-t", "es", "--set"])
        .assert()
        .success();

    assert!(dir.path().join("langs.json").exists());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_empty_language_is_usage_error() {
    let dir = TempDir::new().unwrap();
    gtx(&dir)
        .args(["-s", "", "hello"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_network_failure_exits_unavailable() {
    let dir = TempDir::new().unwrap();
    // Route the request through a proxy port with nothing listening
    gtx(&dir)
        .env("HTTPS_PROXY", "http://127.0.0.1:1")
        .env("https_proxy", "http://127.0.0.1:1")
        .env_remove("NO_PROXY")
        .env_remove("no_proxy")
        .args(["-q", "-s", "en", "-t", "fr", "hello"])
        .assert()
        .failure()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Error: HTTP request error"))
        .stdout(predicate::str::is_empty());
}
