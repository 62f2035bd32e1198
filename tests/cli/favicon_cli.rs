use std::fs;

use predicates::prelude::predicate;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn fingerprints_resource_file() {
    let dir = tempdir().expect("temp dir");
    let icon_path = dir.path().join("favicon.ico");
    fs::write(&icon_path, (0u8..100).collect::<Vec<u8>>()).expect("write icon");

    let output = assert_cmd::cargo::cargo_bin_cmd!("favhash")
        .args(["favicon", "--input"])
        .arg(&icon_path)
        .output()
        .expect("run favhash");
    assert_eq!(output.status.code(), Some(0));

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    let result = &report["results"][0];
    assert_eq!(result["source"], "path");
    assert_eq!(result["bytes"], 100);
    assert_eq!(result["hash"], 3041997281u32);
    assert_eq!(result["hash_signed"], -1252970015);
    assert_eq!(result["query"], "http.favicon.hash:-1252970015");
    assert_eq!(report["failures"], Value::Array(Vec::new()));
}

#[test]
fn reads_stdin_without_inputs() {
    assert_cmd::cargo::cargo_bin_cmd!("favhash")
        .arg("favicon")
        .write_stdin("hello favicon")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""source":"stdin""#))
        .stdout(predicate::str::contains("http.favicon.hash:1145504374"));
}

#[test]
fn partial_failure_keeps_successful_rows() {
    let dir = tempdir().expect("temp dir");
    let icon_path = dir.path().join("icon.png");
    fs::write(&icon_path, b"hello favicon").expect("write icon");
    let missing_path = dir.path().join("missing.png");

    let output = assert_cmd::cargo::cargo_bin_cmd!("favhash")
        .args(["favicon", "--input"])
        .arg(&missing_path)
        .arg("--input")
        .arg(&icon_path)
        .arg("--input")
        .arg(&icon_path)
        .output()
        .expect("run favhash");
    assert_eq!(output.status.code(), Some(2));

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    let results = report["results"].as_array().expect("results");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["hash"], 1145504374);

    let failures = report["failures"].as_array().expect("failures");
    assert_eq!(failures.len(), 1);
    assert!(
        failures[0]["message"]
            .as_str()
            .expect("message")
            .contains("failed to open resource file")
    );
}

#[test]
fn seed_changes_fingerprint() {
    assert_cmd::cargo::cargo_bin_cmd!("favhash")
        .args(["favicon", "--seed", "1"])
        .write_stdin("hello favicon")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("http.favicon.hash:173946997"));
}
