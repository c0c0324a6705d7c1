use crate::cli::support::{casebase, write_config, write_corpus};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_item_is_data_error() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "recommend", "Avatar"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: item not found: Avatar"));
}

#[test]
fn test_unknown_item_json_envelope() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let output = casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--format", "json", "recommend", "Avatar"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "not_found");
    assert_eq!(envelope["error"]["message"], "item not found: Avatar");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--quiet", "recommend", "Avatar"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("item not found").not());
}

#[test]
fn test_missing_corpus_is_usage_error() {
    let dir = tempdir().unwrap();

    casebase()
        .current_dir(dir.path())
        .args(["recommend", "Alien"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no corpus specified"));
}

#[test]
fn test_unreadable_corpus_file_is_failure() {
    let dir = tempdir().unwrap();

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "missing.csv", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn test_corpus_without_required_columns_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.csv"), "name,score\nAlien,1\n").unwrap();

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "bad.csv", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing required column"));
}

#[test]
fn test_negative_weight_is_usage_error() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    write_config(dir.path(), "[weights]\ngenres = -0.5\n");

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "recommend", "Alien"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid weight for genres"));
}

#[test]
fn test_zero_normalization_is_usage_error() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    write_config(dir.path(), "[normalization]\nquality_max = 0.0\n");

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "score", "Alien", "Heat"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--config", "nope.toml", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    write_config(dir.path(), "[weights\ngenres = ");

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    casebase()
        .args(["--format", "yaml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_clap_error_with_json_format_uses_envelope() {
    let output = casebase()
        .args(["--format", "json", "recommend"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
}

#[test]
fn test_root_flag_resolves_relative_paths() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let elsewhere = tempdir().unwrap();

    casebase()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(dir.path())
        .args(["--corpus", "movies.csv", "list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alien"));
}
