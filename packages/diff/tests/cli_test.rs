//! CLI integration tests.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

/// Write a document to a scratch file and return its path.
fn write_doc(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write scratch document");
    path
}

#[test]
fn test_compare_styled_output() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let reference = write_doc(&dir, "reference.txt", "1. Оплата ежемесячно.\n2. Срок 5 лет.");
    let client = write_doc(&dir, "client.txt", "1. Оплата ежеквартально.\n2. Срок 5 лет.");

    Command::cargo_bin("redline-diff")
        .expect("binary should build")
        .arg("compare")
        .arg(&reference)
        .arg(&client)
        .assert()
        .success()
        .stdout(predicate::str::contains("modified"))
        .stdout(predicate::str::contains("Document, sub-clause 1."))
        .stdout(predicate::str::contains("Summary:"));
}

#[test]
fn test_compare_identical_documents() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let reference = write_doc(&dir, "reference.txt", "1. Один и тот же текст.");
    let client = write_doc(&dir, "client.txt", "1. Один и тот же текст.");

    Command::cargo_bin("redline-diff")
        .expect("binary should build")
        .arg("compare")
        .arg(&reference)
        .arg(&client)
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes detected"));
}

#[test]
fn test_compare_json_output() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let reference = write_doc(&dir, "reference.txt", "1. Старый пункт.");
    let client = write_doc(&dir, "client.txt", "1. Новый пункт.");

    let output = Command::cargo_bin("redline-diff")
        .expect("binary should build")
        .arg("compare")
        .arg(&reference)
        .arg(&client)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let changes: serde_json::Value =
        serde_json::from_slice(&output).expect("JSON output should parse");
    let records = changes.as_array().expect("output should be a JSON array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["change_type"], "modification");
}

#[test]
fn test_compare_missing_file_fails() {
    Command::cargo_bin("redline-diff")
        .expect("binary should build")
        .arg("compare")
        .arg("no-such-reference.txt")
        .arg("no-such-client.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
