//! # osgbuild Run Integration Tests
//!
//! File: cli/tests/run.rs
//!
//! ## Overview
//!
//! Drives `osgbuild run` end to end: output capture and stripping, tokenizing
//! without a shell, locale forcing, stderr merging, and the error and exit
//! status behavior on failing commands.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_run_prints_stripped_output() {
    osgbuild_cmd()
        .args(["run", "--shell", "printf '  hello\\n\\n'"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_run_nostrip() {
    osgbuild_cmd()
        .args(["run", "--shell", "--nostrip", "printf '  hello\\n'"])
        .assert()
        .success()
        .stdout("  hello\n");
}

#[test]
fn test_run_tokenizes_without_shell() {
    // Without a shell, '$HOME' and the pipe are plain arguments to echo.
    osgbuild_cmd()
        .args(["run", "echo '$HOME' | wc"])
        .assert()
        .success()
        .stdout("$HOME | wc\n");
}

#[test]
fn test_run_argv_form() {
    osgbuild_cmd()
        .args(["run", "--", "printf", "%s-%s", "a b", "c"])
        .assert()
        .success()
        .stdout("a b-c\n");
}

#[test]
fn test_run_forces_c_locale() {
    osgbuild_cmd()
        .env("LANG", "de_DE.UTF-8")
        .env_remove("LC_ALL")
        .args(["run", "--shell", "echo $LANG $LC_ALL"])
        .assert()
        .success()
        .stdout("C C\n");
}

#[test]
fn test_run_no_clocale_keeps_caller_locale() {
    osgbuild_cmd()
        .env("LANG", "de_DE.UTF-8")
        .args(["run", "--shell", "--no-clocale", "echo $LANG"])
        .assert()
        .success()
        .stdout("de_DE.UTF-8\n");
}

#[test]
fn test_run_err2out() {
    osgbuild_cmd()
        .args(["run", "--shell", "--err2out", "echo out; echo err >&2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out").and(predicate::str::contains("err")));
}

#[test]
fn test_run_failure_reports_called_process_error() {
    osgbuild_cmd()
        .args(["run", "--shell", "echo partial; exit 4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Error in called process(echo partial; exit 4): subprocess returned 4.",
        ))
        .stderr(predicate::str::contains("Output: partial"));
}

#[test]
fn test_run_status_exits_with_child_status() {
    osgbuild_cmd()
        .args(["run", "--status", "--shell", "echo almost; exit 7"])
        .assert()
        .code(7)
        .stdout("almost\n");
}

#[test]
fn test_run_missing_program() {
    osgbuild_cmd()
        .args(["run", "osgbuild-no-such-program --flag"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("osgbuild-no-such-program"));
}

#[test]
fn test_run_unbalanced_quotes() {
    osgbuild_cmd()
        .args(["run", "echo 'unterminated"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid command: cannot split command line"));
}

#[test]
fn test_run_cwd() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "marker.txt", "");
    osgbuild_cmd()
        .args(["run", "--cwd", dir.path().to_str().unwrap(), "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker.txt"));
}
