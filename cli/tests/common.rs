//! # osgbuild CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and drives the compiled `osgbuild` binary through
//! `assert_cmd`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// An `assert_cmd::Command` for the `osgbuild` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn osgbuild_cmd() -> Command {
    Command::cargo_bin("osgbuild").expect("Failed to find osgbuild binary for testing")
}

/// Writes `contents` to `name` inside `dir` and returns the full path as a string.
pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test fixture");
    path.to_string_lossy().into_owned()
}
