use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("telegate"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_dump(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.hex")
}

#[test]
fn help_covers_decode() {
    cmd()
        .arg("hex")
        .arg("decode")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("report.json"));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("frames.bin");
    std::fs::write(&input, "00B1\n").expect("write input");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn stdout_outputs_json() {
    let assert = cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("basic"))
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let report: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(report["frames_total"], 2);
    assert_eq!(report["frames_decoded"], 2);
}

#[test]
fn report_file_is_written() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("basic"))
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: 2/2 frames decoded"));

    let written = std::fs::read_to_string(&report).expect("read report");
    let _: Value = serde_json::from_str(&written).expect("valid json");
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("basic"))
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("basic"))
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("basic"))
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn list_failures_outputs_codes() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("mixed"))
        .arg("-o")
        .arg(report)
        .arg("--list-failures")
        .assert()
        .success()
        .stderr(contains("Parse failures:").and(contains("0x25 unknown function code (1)")));
}

#[test]
fn strict_fails_when_frames_fail_to_parse() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("checksum_error"))
        .arg("-o")
        .arg(report)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("parse failures detected"));
}

#[test]
fn strict_passes_on_clean_input() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("hex")
        .arg("decode")
        .arg(sample_dump("basic"))
        .arg("-o")
        .arg(report)
        .arg("--strict")
        .assert()
        .success();
}
