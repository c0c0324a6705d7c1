use crate::cli::support::{casebase, write_corpus};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("read_corpus"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--log-level", "debug", "recommend", "Alien"])
        .assert()
        .success()
        .stderr(predicate::str::contains("recommend_params"));
}

#[test]
fn test_log_env_var() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    casebase()
        .current_dir(dir.path())
        .env("CASEBASE_LOG", "casebase=debug")
        .args(["--corpus", "movies.csv", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let output = casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--verbose", "--log-json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().unwrap();
    let value: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(value.get("level").is_some());
}

#[test]
fn test_malformed_fields_are_logged() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("messy.csv"),
        "id,original_title,popularity\n1,Messy,lots\n",
    )
    .unwrap();

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "messy.csv", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid number"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let output = casebase()
        .current_dir(dir.path())
        .args(["--corpus", "movies.csv", "--verbose", "--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.len(), 6);
}

#[test]
fn test_non_finite_numbers_are_logged() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("nan.csv"),
        "id,original_title,popularity\n1,Odd,NaN\n",
    )
    .unwrap();

    casebase()
        .current_dir(dir.path())
        .args(["--corpus", "nan.csv", "--format", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"popularity\": 0.0"))
        .stderr(predicate::str::contains("invalid number"));
}
