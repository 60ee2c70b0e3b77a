//! End-to-end tests for the `freq-solver` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn freq_solver() -> Command {
    Command::cargo_bin("freq-solver").expect("binary should build")
}

#[test]
fn test_decode_inline_text() {
    freq_solver()
        .args(["decode", "--text", "AAAA BBBB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EEEE AAAA"))
        .stdout(predicate::str::contains("Substitution Map"))
        .stdout(predicate::str::contains("A        | 50.0000"));
}

#[test]
fn test_decode_quiet_prints_only_text() {
    freq_solver()
        .args(["decode", "--quiet", "--text", "E"])
        .assert()
        .success()
        .stdout("E\n");
}

#[test]
fn test_decode_from_stdin() {
    freq_solver()
        .args(["decode", "-q", "-"])
        .write_stdin("aaaa, bbbb!\n")
        .assert()
        .success()
        .stdout("EEEE, AAAA!\n\n");
}

#[test]
fn test_decode_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "AAAA BBBB").expect("write ciphertext");

    freq_solver()
        .args(["decode", "--quiet"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("EEEE AAAA\n");
}

#[test]
fn test_decode_prompts_when_no_input_given() {
    freq_solver()
        .arg("decode")
        .write_stdin("E\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FREQUENCY ANALYZER"))
        .stdout(predicate::str::contains("Enter the ciphertext: "))
        .stdout(predicate::str::contains("Decoded Text"));
}

#[test]
fn test_decode_banner_only_when_prompting() {
    freq_solver()
        .args(["decode", "--text", "AAAA BBBB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FREQUENCY ANALYZER").not());

    freq_solver()
        .args(["decode", "--quiet"])
        .write_stdin("E\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("FREQUENCY ANALYZER").not());
}

#[test]
fn test_decode_no_letters_is_not_a_failure() {
    freq_solver()
        .args(["decode", "--text", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decoded Text").not())
        .stderr(predicate::str::contains(
            "ciphertext contains no letters to analyze",
        ));
}

#[test]
fn test_decode_no_letters_json() {
    let output = freq_solver()
        .args(["--format", "json", "decode", "--text", "1234 !!!"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["error"], "ciphertext contains no letters to analyze");
}

#[test]
fn test_decode_json_output() {
    let output = freq_solver()
        .args(["decode", "--format", "json", "--text", "AAAA BBBB"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["decoded"], "EEEE AAAA");
    assert_eq!(value["assignments"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_decode_tsv_output() {
    freq_solver()
        .args(["-f", "tsv", "decode", "--text", "E"])
        .assert()
        .success()
        .stdout("cipher\tobserved\tplain\treference\tdifference\nE\t100.0000\tE\t16.7800\t83.2200\n");
}

#[test]
fn test_decode_missing_file_fails() {
    freq_solver()
        .args(["decode", "/nonexistent/ciphertext.txt"])
        .assert()
        .failure();
}

#[test]
fn test_text_and_input_conflict() {
    freq_solver()
        .args(["decode", "--text", "abc", "message.txt"])
        .assert()
        .failure();
}

#[test]
fn test_table_lists_all_letters() {
    freq_solver()
        .args(["table", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("letter\tfrequency\nE\t16.78\n"))
        .stdout(predicate::str::contains("Ñ\t0.29"))
        .stdout(predicate::str::contains("P\t2.776"));
}

#[test]
fn test_table_text_output() {
    freq_solver()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spanish letter frequencies (es)"));
}

#[test]
fn test_table_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("table.json");

    freq_solver()
        .args(["table", "--export"])
        .arg(&path)
        .assert()
        .success();

    let json = std::fs::read_to_string(&path).expect("exported file");
    let table = freq_solver::ReferenceTable::from_json(&json).expect("valid table");
    assert_eq!(table.len(), 27);
}
