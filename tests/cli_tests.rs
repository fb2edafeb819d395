//! End-to-end tests for the mdconvert binary
//!
//! Each test spawns the real binary in its own scratch directory, so the
//! default settings-file lookup and relative input paths are isolated per
//! test. The exit-code contract under test: 0 success, 1 no destination,
//! 2 destination not a directory, 3 no inputs, 4 bad input, 5 per-file
//! failure.

use assert_cmd::Command;
use camino::Utf8PathBuf;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn scratch() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    fs::create_dir(root.join("out")).unwrap();
    (temp_dir, root)
}

fn mdconvert(root: &Utf8PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("mdconvert").unwrap();
    cmd.current_dir(root)
        .env_remove("MDCONVERT_ENCODING")
        .env_remove("MDCONVERT_OVERWRITE")
        .env_remove("MDCONVERT_RESUME")
        .env_remove("MDCONVERT_DEBUG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_single_file_success() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("a.md"), "# Hello\n\nworld\n").unwrap();

    mdconvert(&root)
        .args(["out", "a.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converting file \"a.md\" ..."));

    let written = fs::read_to_string(root.join("out/a.html")).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("<meta charset=\"UTF-8\" />"));
    assert!(written.contains("<h1>Hello</h1>"));
}

#[test]
fn test_existing_destination_fails_without_overwrite() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("a.md"), "# Hello\n").unwrap();
    fs::write(root.join("out/a.html"), "original").unwrap();

    mdconvert(&root)
        .args(["out", "a.md"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(root.join("out/a.html")).unwrap(), "original");
}

#[test]
fn test_overwrite_flag_replaces_destination() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("a.md"), "# New\n").unwrap();
    fs::write(root.join("out/a.html"), "original").unwrap();

    mdconvert(&root)
        .args(["--overwrite", "out", "a.md"])
        .assert()
        .success();

    assert!(fs::read_to_string(root.join("out/a.html"))
        .unwrap()
        .contains("<h1>New</h1>"));
}

#[test]
fn test_no_arguments_exit_1() {
    let (_temp_dir, root) = scratch();

    mdconvert(&root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Destination directory is a required argument."));
}

#[test]
fn test_destination_is_a_file_exit_2() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("not-a-dir"), "x").unwrap();
    fs::write(root.join("a.md"), "# x\n").unwrap();

    mdconvert(&root)
        .args(["not-a-dir", "a.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("There is no directory at"));

    assert!(!root.join("a.html").exists());
}

#[test]
fn test_no_inputs_exit_3() {
    let (_temp_dir, root) = scratch();

    mdconvert(&root)
        .args(["out"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("at least one file"));
}

#[test]
fn test_missing_input_exit_4() {
    let (_temp_dir, root) = scratch();

    mdconvert(&root)
        .args(["out", "ghost.md"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("There is no file at \"ghost.md\""));
}

#[test]
fn test_absolute_input_halts_without_resume() {
    let (_temp_dir, root) = scratch();
    let absolute = root.join("a.md");
    fs::write(&absolute, "# A\n").unwrap();
    fs::write(root.join("b.md"), "# B\n").unwrap();

    mdconvert(&root)
        .args(["out", absolute.as_str(), "b.md"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("must be relative"));

    // Halted at the first failure: b.md was never attempted.
    assert!(!root.join("out/b.html").exists());
}

#[test]
fn test_resume_continues_past_failure() {
    let (_temp_dir, root) = scratch();
    let absolute = root.join("a.md");
    fs::write(&absolute, "# A\n").unwrap();
    fs::write(root.join("b.md"), "# B\n").unwrap();

    mdconvert(&root)
        .args(["--resume", "out", absolute.as_str(), "b.md"])
        .assert()
        .code(5);

    // The failure was recorded, but the run went on.
    assert!(root.join("out/b.html").is_file());
}

#[test]
fn test_overwrite_via_environment() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("a.md"), "# Env\n").unwrap();
    fs::write(root.join("out/a.html"), "original").unwrap();

    mdconvert(&root)
        .env("MDCONVERT_OVERWRITE", "true")
        .args(["out", "a.md"])
        .assert()
        .success();

    assert!(fs::read_to_string(root.join("out/a.html"))
        .unwrap()
        .contains("<h1>Env</h1>"));
}

#[test]
fn test_encoding_option_controls_output_charset() {
    let (_temp_dir, root) = scratch();
    // "café" in windows-1252 bytes.
    fs::write(root.join("a.md"), b"caf\xE9\n").unwrap();

    mdconvert(&root)
        .args(["--encoding", "windows-1252", "out", "a.md"])
        .assert()
        .success();

    let bytes = fs::read(root.join("out/a.html")).unwrap();
    let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
    assert!(!had_errors);
    assert!(decoded.contains("café"));
    assert!(decoded.contains("<meta charset=\"windows-1252\" />"));
}

#[test]
fn test_settings_file_enables_overwrite() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("mdconvert.yaml"), "overwrite: true\n").unwrap();
    fs::write(root.join("a.md"), "# Cfg\n").unwrap();
    fs::write(root.join("out/a.html"), "original").unwrap();

    mdconvert(&root)
        .args(["out", "a.md"])
        .assert()
        .success();

    assert!(fs::read_to_string(root.join("out/a.html"))
        .unwrap()
        .contains("<h1>Cfg</h1>"));
}

#[test]
fn test_unknown_encoding_is_per_file_failure() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("a.md"), "# x\n").unwrap();

    mdconvert(&root)
        .args(["--encoding", "klingon", "out", "a.md"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unsupported encoding"));
}

#[test]
fn test_nested_input_mirrors_directories() {
    let (_temp_dir, root) = scratch();
    fs::create_dir_all(root.join("docs/sub")).unwrap();
    fs::write(root.join("docs/sub/deep.md"), "# Deep\n").unwrap();

    mdconvert(&root)
        .args(["out", "docs/sub/deep.md"])
        .assert()
        .success();

    assert!(root.join("out/docs/sub/deep.html").is_file());
}

#[test]
fn test_non_markup_extension_appends_html() {
    let (_temp_dir, root) = scratch();
    fs::write(root.join("notes.txt"), "plain text\n").unwrap();

    mdconvert(&root)
        .args(["out", "notes.txt"])
        .assert()
        .success();

    assert!(root.join("out/notes.txt.html").is_file());
}

#[test]
fn test_debug_flag_shows_diagnostic_detail() {
    let (_temp_dir, root) = scratch();
    let absolute = root.join("a.md");
    fs::write(&absolute, "# A\n").unwrap();

    mdconvert(&root)
        .args(["--debug", "out", absolute.as_str()])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("must be relative"));
}
