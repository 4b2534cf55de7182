//! Integration tests for the ednt binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ednt() -> Command {
    Command::cargo_bin("ednt").expect("binary builds")
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn check_reports_ok_for_valid_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "ok.edn", "{:a 1}\n[1 2 3]\n");

    ednt()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (2 forms)"));
}

#[test]
fn check_fails_on_syntax_error_with_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "bad.edn", "{:a 1\n:b }\n");

    ednt()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn check_rejects_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.json", "{}");

    ednt()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension `json`"));
}

#[test]
fn format_canonicalizes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "messy.edn", ";; header\n{ :a,,,1,  :b  2 }\n");

    ednt()
        .arg("format")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("{:a 1 :b 2}"));
}

#[test]
fn format_char_names_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "chars.edn", "\\newline");

    ednt()
        .arg("format")
        .arg("--char-names")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\\newline"));
}

#[test]
fn convert_emits_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "data.edn", "{:name \"x\" :tags #{:a :a :b}}");

    let assert = ednt().arg("convert").arg(&path).assert().success();
    let output = assert.get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["name"], "x");
    assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
}

#[test]
fn convert_unknown_tag_needs_ignore_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "tagged.edn", "#inst \"1985-04-12\"");

    ednt()
        .arg("convert")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no handler registered for tag `inst`"));

    ednt()
        .arg("convert")
        .arg("--ignore-tags")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1985-04-12"));
}

#[test]
fn convert_respects_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "tagged.edn", "#uuid \"f81d4fae\"");
    let config = write_file(&dir, "ednt.toml", "[convert]\nignore_tags = true\n");

    ednt()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("f81d4fae"));
}
