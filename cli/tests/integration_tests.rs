//! Integration tests for the helpmatch binary: classify/run flows and
//! multi-format output.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

fn helpmatch_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_helpmatch"))
}

// ---- classify tests ----

#[test]
fn test_classify_json_output() {
    let output = Command::new(helpmatch_bin())
        .args(["classify", "--format", "json", "--", "mytool", "--hellp"])
        .output()
        .expect("failed to run helpmatch");

    assert!(
        output.status.success(),
        "classify failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON output: {e}\n{stdout}"));
    assert_eq!(parsed["program"], "mytool");
    assert_eq!(parsed["dialogue"], "help");
    assert_eq!(parsed["help_index"], 1);
}

#[test]
fn test_classify_yaml_output() {
    let output = Command::new(helpmatch_bin())
        .args(["classify", "--format", "yaml", "--", "mytool", "--version"])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("program: mytool"));
    assert!(stdout.contains("dialogue: version"));
}

#[test]
fn test_classify_table_output() {
    let output = Command::new(helpmatch_bin())
        .args(["classify", "--", "mytool", "--help", "--version"])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Program: mytool"));
    assert!(stdout.contains("help match at argument 1"));
    assert!(stdout.contains("version match at argument 2"));
}

#[test]
fn test_classify_literal_rejects_pattern_only_spelling() {
    let output = Command::new(helpmatch_bin())
        .args([
            "classify", "--literal", "--format", "json", "--", "mytool", "heellp",
        ])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["dialogue"], "no_match");
    assert_eq!(parsed["strategy"], "literal");
}

#[test]
fn test_classify_empty_program_name_fails() {
    let output = Command::new(helpmatch_bin())
        .args(["classify", "--", "", "--help"])
        .output()
        .expect("failed to run helpmatch");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("program name"), "stderr: {stderr}");
}

// ---- run tests ----

#[test]
fn test_run_prints_version_dialogue() {
    let output = Command::new(helpmatch_bin())
        .args([
            "run",
            "--name",
            "mytool",
            "--app-version",
            "2.0.1",
            "--help-text",
            "usage: mytool FILE",
            "--",
            "mytool",
            "--version",
        ])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.0.1\n");
}

#[test]
fn test_run_prints_combined_dialogue() {
    let output = Command::new(helpmatch_bin())
        .args([
            "run",
            "--name",
            "mytool",
            "--app-version",
            "2.0.1",
            "--help-text",
            "usage: mytool FILE",
            "--",
            "mytool",
            "--help",
            "--version",
        ])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "mytool Version 2.0.1\nusage: mytool FILE\n"
    );
}

#[test]
fn test_run_help_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "usage from a file").unwrap();

    let output = Command::new(helpmatch_bin())
        .args(["run", "--help-file"])
        .arg(file.path())
        .args(["--", "mytool", "--help"])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "usage from a file\n");
}

#[test]
fn test_run_missing_help_file_fails() {
    let output = Command::new(helpmatch_bin())
        .args([
            "run",
            "--help-file",
            "/nonexistent/helpmatch-help.txt",
            "--",
            "mytool",
            "--help",
        ])
        .output()
        .expect("failed to run helpmatch");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("I/O error"), "stderr: {stderr}");
}

#[test]
fn test_run_unknown_argument_notice() {
    let output = Command::new(helpmatch_bin())
        .args([
            "run",
            "--unknown-arg-help",
            "--help-text",
            "usage",
            "--",
            "mytool",
            "frobnicate",
        ])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Unknown argument given\n"
    );
}

#[test]
fn test_run_stderr_target() {
    let output = Command::new(helpmatch_bin())
        .args([
            "run",
            "--output",
            "stderr",
            "--help-text",
            "usage",
            "--",
            "mytool",
            "--help",
        ])
        .output()
        .expect("failed to run helpmatch");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "usage\n");
}
