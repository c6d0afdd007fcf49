//! End-to-end runs of the `graph` binary.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn data_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f
}

#[test]
fn plots_small_series_without_compression() {
    let f = data_file("1 2 3 4 5 6 7 8 9 10");
    let out = cargo_bin_cmd!("graph")
        .args(["-sa", "-x10", "-y5", "-cs"])
        .arg(f.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("10 values found."))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('*').count(), 10);
    assert!(text.contains("  0 |*_________X (10)"));
    assert_eq!(text.lines().filter(|l| l.contains("X (")).count(), 1);
}

#[test]
fn dash_style_and_average_compression() {
    let values: Vec<String> = (0..100).map(|i| (i % 10).to_string()).collect();
    let f = data_file(&values.join("\n"));
    cargo_bin_cmd!("graph")
        .args(["-sd", "-x20", "-y4", "-ca"])
        .arg(f.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("X (100)"))
        .stdout(predicate::str::contains('*').not());
}

#[test]
fn reads_stdin_for_dash() {
    cargo_bin_cmd!("graph")
        .args(["-x5", "-y2", "-"])
        .write_stdin("3,1,2")
        .assert()
        .success()
        .stdout(predicate::str::contains("file: - 3 values found."));
}

#[test]
fn malformed_tokens_warn_and_continue() {
    let f = data_file("1 1..2 3");
    cargo_bin_cmd!("graph")
        .args(["-x5", "-y2"])
        .arg(f.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 values found."))
        .stderr(predicate::str::contains("'1..2' is not a float"));
}

#[test]
fn empty_file_is_a_file_error() {
    let f = data_file("no numbers at all\n");
    cargo_bin_cmd!("graph")
        .arg(f.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("|").not())
        .stderr(predicate::str::contains("no values found in file"));
}

#[test]
fn missing_file_is_a_file_error() {
    cargo_bin_cmd!("graph")
        .arg("/no/such/dir/data.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open file"));
}

#[test]
fn oversize_width_aborts_before_output() {
    let f = data_file("1 2 3");
    cargo_bin_cmd!("graph")
        .arg("-x1200")
        .arg(f.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("1200").and(predicate::str::contains("1000")));
}

#[test]
fn oversize_height_aborts_before_output() {
    let f = data_file("1 2 3");
    cargo_bin_cmd!("graph")
        .arg("-y500")
        .arg(f.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn unknown_style_is_a_usage_error() {
    let f = data_file("1 2 3");
    cargo_bin_cmd!("graph")
        .arg("-sz")
        .arg(f.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown style"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn bad_width_value_is_a_usage_error() {
    let f = data_file("1 2 3");
    cargo_bin_cmd!("graph")
        .arg("-xwide")
        .arg(f.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cargo_bin_cmd!("graph")
        .args(["-q", "data.txt"])
        .assert()
        .code(1);
}

#[test]
fn help_exits_cleanly() {
    cargo_bin_cmd!("graph")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn license_banner_then_chart() {
    let f = data_file("4 5 6");
    cargo_bin_cmd!("graph")
        .args(["-l", "-x3", "-y2"])
        .arg(f.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright (C) 2017"))
        .stdout(predicate::str::contains("WITHOUT ANY WARRANTY"))
        .stdout(predicate::str::contains("X (3)"));
}
