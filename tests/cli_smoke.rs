use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn loctally_bin() -> &'static str {
    env!("CARGO_BIN_EXE_loctally")
}

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("failed to write test file");
}

fn run(args: &[&str], root: &Path) -> Output {
    Command::new(loctally_bin())
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute loctally")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got status {:?}, stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_prints_report_for_basic_run() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(
        &temp_dir.path().join("main.rs"),
        "fn main() {}\n// comment\n",
    );

    let output = run(&[], temp_dir.path());
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("loctally v"), "stdout missing banner: {stdout}");
    assert!(stdout.contains("Language"), "stdout missing header: {stdout}");
    assert!(stdout.contains("Rust"), "stdout missing Rust row: {stdout}");
    assert!(
        stdout.contains("Ignored files: 0"),
        "stdout missing ignored count: {stdout}"
    );
}

#[test]
fn cli_missing_path_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let output = run(&[], &temp_dir.path().join("does_not_exist"));

    assert!(!output.status.success(), "missing root must fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Path does not exist"),
        "stderr should explain the failure: {stderr}"
    );
}

#[test]
fn cli_rejects_wildcard_root() {
    let output = Command::new(loctally_bin())
        .arg("src/*.rs")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute loctally");
    assert!(!output.status.success(), "wildcard root must fail");
}

#[test]
fn cli_rejects_unknown_backend_and_zero_threads() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let output = run(&["-backend", "fibers"], temp_dir.path());
    assert!(!output.status.success(), "unknown backend must fail");

    let output = run(&["-backend", "Sync"], temp_dir.path());
    assert!(!output.status.success(), "backend names are case-sensitive");

    let output = run(&["-threads", "0"], temp_dir.path());
    assert!(!output.status.success(), "zero threads must fail");
}

#[test]
fn cli_legacy_flags_disable_recursion() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(&temp_dir.path().join("root.rs"), "fn root() {}\n");
    let sub_dir = temp_dir.path().join("sub");
    fs::create_dir(&sub_dir).expect("failed to create sub directory");
    write_file(&sub_dir.join("nested.py"), "print('x')\n");

    for flag in ["-nr", "-norecurse", "--no-recurse"] {
        let output = run(&[flag, "-backend", "sync"], temp_dir.path());
        assert_success(&output);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Rust"), "{flag}: missing Rust row: {stdout}");
        assert!(
            !stdout.contains("Python"),
            "{flag}: nested file should not be counted: {stdout}"
        );
    }
}

#[test]
fn cli_ignore_and_filespec() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let root = temp_dir.path();
    write_file(&root.join("keep.rs"), "fn keep() {}\n");
    write_file(&root.join("other.py"), "x = 1\n");
    let vendor = root.join("vendor");
    fs::create_dir(&vendor).expect("failed to create vendor");
    write_file(&vendor.join("dep.go"), "package dep\n");

    let output = run(&["--ignore", "vendor", "--filespec", "*.rs"], root);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rust"), "missing Rust row: {stdout}");
    assert!(!stdout.contains("Python"), "filespec should drop .py: {stdout}");
    assert!(!stdout.contains("Go"), "ignored dir should be skipped: {stdout}");
    assert!(
        stdout.contains("Ignored files: 0"),
        "filtered files are not ignored files: {stdout}"
    );
}

#[test]
fn cli_languages_lists_and_exits() {
    let output = Command::new(loctally_bin())
        .arg("--languages")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute loctally");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("Supported languages:"),
        "unexpected listing header: {stdout}"
    );
    for needle in ["Rust", "Python", "SQL", "XML", "Dockerfile", ".rst.txt"] {
        assert!(stdout.contains(needle), "listing missing {needle}");
    }
}

#[test]
fn cli_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(&temp_dir.path().join("a.c"), "int x;\n");

    let output = run(&["-v", "-backend", "sync"], temp_dir.path());
    assert_success(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("counted file"), "missing debug log: {stderr}");
    assert!(!stdout.contains("counted file"), "logs leaked to stdout: {stdout}");
}

#[test]
fn cli_accepts_maximum_thread_count() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(&temp_dir.path().join("a.c"), "int x;\n");

    let output = run(&["-threads", "4294967295"], temp_dir.path());
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("C "), "missing C row: {stdout}");
}
