//! End-to-end tests for the fastqc-report binary.
//!
//! Archives are written into temporary directories at test time so the
//! fixtures stay readable in the repository.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fastqc_data.txt")
}

fn fixture_text() -> String {
    std::fs::read_to_string(fixture()).expect("Failed to read fixture")
}

fn write_zip(dir: &TempDir, name: &str, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    for (member, content) in members {
        writer
            .start_file(*member, zip::write::SimpleFileOptions::default())
            .expect("Failed to start archive member");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write archive member");
    }
    writer.finish().expect("Failed to finish archive");
    path
}

fn cmd() -> Command {
    Command::cargo_bin("fastqc-report").expect("Binary not built")
}

fn stdout_of(args: &[&str]) -> String {
    let output = cmd().args(args).output().expect("Failed to run binary");
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_summary_text() {
    cmd()
        .arg("summary")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Module Name"))
        .stdout(predicate::str::contains("Basic Statistics"))
        .stdout(predicate::str::contains("Adapter Content"));
}

#[test]
fn test_summary_tsv() {
    let fixture = fixture();
    let stdout = stdout_of(&["--format", "tsv", "summary", fixture.to_str().unwrap()]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Module Name\tStatus");
    assert_eq!(lines[1], "Basic Statistics\tpass");
    assert_eq!(lines[3], "Per tile sequence quality\twarn");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_summary_json() {
    let fixture = fixture();
    let stdout = stdout_of(&["--format", "json", "summary", fixture.to_str().unwrap()]);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");

    assert_eq!(rows[0]["module"], "Module Name");
    assert_eq!(rows[0]["status"], "Status");
    assert_eq!(rows[5]["module"], "Sequence Duplication Levels");
    assert_eq!(rows[5]["status"], "fail");
}

#[test]
fn test_summary_status_filter() {
    cmd()
        .args(["--format", "tsv", "summary", "--status", "fail"])
        .arg(fixture())
        .assert()
        .success()
        .stdout("Module Name\tStatus\nSequence Duplication Levels\tfail\n");
}

#[test]
fn test_summary_text_and_archive_match() {
    let dir = TempDir::new().unwrap();
    let text = fixture_text();
    let archive = write_zip(
        &dir,
        "sample1_fastqc.zip",
        &[
            ("sample1_fastqc/fastqc_report.html", "<html></html>"),
            ("sample1_fastqc/fastqc_data.txt", text.as_str()),
        ],
    );

    let fixture = fixture();
    let from_text = stdout_of(&["--format", "tsv", "summary", fixture.to_str().unwrap()]);
    let from_zip = stdout_of(&["--format", "tsv", "summary", archive.to_str().unwrap()]);
    assert_eq!(from_text, from_zip);
}

#[test]
fn test_raw_module() {
    let fixture = fixture();
    let stdout = stdout_of(&["raw", fixture.to_str().unwrap(), "Basic Statistics"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], ">>Basic Statistics\tpass");
    assert_eq!(lines[lines.len() - 1], ">>END_MODULE");
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_clean_module() {
    let fixture = fixture();
    let stdout = stdout_of(&["clean", fixture.to_str().unwrap(), "Basic Statistics"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Measure\tValue");
    assert_eq!(lines[1], "Filename\tsample1.fastq");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_clean_module_json() {
    let fixture = fixture();
    let stdout = stdout_of(&[
        "--format",
        "json",
        "clean",
        fixture.to_str().unwrap(),
        "Per base sequence quality",
    ]);
    let rows: Vec<Vec<String>> = serde_json::from_str(&stdout).expect("Invalid JSON");

    assert_eq!(rows[0][0], "Base");
    assert_eq!(rows[0].len(), 7);
    assert_eq!(rows[1], vec!["1", "32.1", "33.0", "31.0", "34.0", "30.0", "34.0"]);
}

#[test]
fn test_clean_empty_module_fails() {
    cmd()
        .arg("clean")
        .arg(fixture())
        .arg("Overrepresented sequences")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data"));
}

#[test]
fn test_raw_unknown_module_fails() {
    cmd()
        .arg("raw")
        .arg(fixture())
        .arg("Kmer Content")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Kmer Content"));
}

#[test]
fn test_content_first_line() {
    let fixture = fixture();
    let stdout = stdout_of(&["content", fixture.to_str().unwrap()]);

    assert!(stdout.starts_with("##FastQC"));
    assert_eq!(stdout, fixture_text());
}

#[test]
fn test_content_from_stdin() {
    let output = cmd()
        .args(["content", "-"])
        .write_stdin(fixture_text())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), fixture_text());
}

#[test]
fn test_summary_from_stdin_crlf() {
    cmd()
        .args(["--format", "tsv", "summary", "-"])
        .write_stdin(fixture_text().replace('\n', "\r\n"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Module Name\tStatus\nBasic Statistics\tpass\n",
        ));
}

#[test]
fn test_archive_without_data_file_fails() {
    let dir = TempDir::new().unwrap();
    let archive = write_zip(&dir, "empty.zip", &[("fastqc/summary.txt", "PASS\n")]);

    cmd()
        .arg("summary")
        .arg(archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No file matching *fastqc_data.txt found in zip archive",
        ));
}

#[test]
fn test_archive_with_multiple_data_files_warns() {
    let dir = TempDir::new().unwrap();
    let text = fixture_text();
    let other = text.replace("Basic Statistics", "Other Statistics");
    let archive = write_zip(
        &dir,
        "fastqc_multiple.zip",
        &[
            ("one_fastqc_data.txt", text.as_str()),
            ("two_fastqc_data.txt", other.as_str()),
        ],
    );

    let output = cmd()
        .args(["--format", "tsv", "summary"])
        .arg(archive)
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Basic Statistics\tpass"));
    assert!(!stdout.contains("Other Statistics"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Multiple files").count(), 1, "{stderr}");
    assert!(stderr.contains("one_fastqc_data.txt"));
    assert!(stderr.contains("two_fastqc_data.txt"));
    assert!(stderr.contains("Choosing one_fastqc_data.txt"));
    assert!(!stderr.contains("Choosing two_fastqc_data.txt"));
}

#[test]
fn test_unsupported_suffix_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fastqc_report.html");
    std::fs::write(&path, "<html></html>").unwrap();

    cmd()
        .arg("summary")
        .arg(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported report source"));
}

#[test]
fn test_encoding_option() {
    let mut bytes = fixture_text().replace("sample1.fastq", "sample_X.fastq").into_bytes();
    let pos = bytes
        .windows(8)
        .position(|w| w == b"sample_X")
        .expect("Marker not found");
    bytes[pos + 7] = 0xE9;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fastqc_data.txt");
    std::fs::write(&path, &bytes).unwrap();

    cmd()
        .args(["--encoding", "latin1", "clean"])
        .arg(&path)
        .arg("Basic Statistics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filename\tsample_\u{e9}.fastq"));

    cmd()
        .args(["clean"])
        .arg(&path)
        .arg("Basic Statistics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}
