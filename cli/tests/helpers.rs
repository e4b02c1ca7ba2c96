//! # osgbuild Helper Command Integration Tests
//!
//! File: cli/tests/helpers.rs
//!
//! ## Overview
//!
//! End-to-end checks of the smaller subcommands: `find`, `config`, `unpack`
//! and `dver`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_find_first_and_all() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let a = write_file(first.path(), "mock.cfg", "a");
    let b = write_file(second.path(), "mock.cfg", "b");
    let first_dir = first.path().to_str().unwrap();
    let second_dir = second.path().to_str().unwrap();

    osgbuild_cmd()
        .args(["find", "--path", first_dir, "--path", second_dir, "mock.cfg"])
        .assert()
        .success()
        .stdout(format!("{}\n", a));

    osgbuild_cmd()
        .args(["find", "--all", "--path", first_dir, "--path", second_dir, "mock.cfg"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", a, b));
}

#[test]
fn test_find_strict_not_found() {
    let dir = tempdir().unwrap();
    osgbuild_cmd()
        .args(["find", "--strict", "--path", dir.path().to_str().unwrap(), "nothing.cfg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing.cfg"));

    osgbuild_cmd()
        .args(["find", "--path", dir.path().to_str().unwrap(), "nothing.cfg"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_config_layering_and_lists() {
    let dir = tempdir().unwrap();
    let base = write_file(
        dir.path(),
        "base.ini",
        "[DEFAULT]\nscratch = false\n\n[koji]\ntargets = el8, el9\n",
    );
    let user = write_file(dir.path(), "user.ini", "[koji]\ntargets = el9 el10\n");

    osgbuild_cmd()
        .args(["config", &base, &user, "--get", "koji.targets", "--list"])
        .assert()
        .success()
        .stdout("el9\nel10\n");

    osgbuild_cmd()
        .args(["config", &base, &user, "--get", "koji.scratch"])
        .assert()
        .success()
        .stdout("false\n");

    osgbuild_cmd()
        .args(["config", &base, "--get", "koji.missing", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");

    osgbuild_cmd()
        .args(["config", &base, "--get", "koji.missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_config_nothing_loadable() {
    let dir = tempdir().unwrap();
    osgbuild_cmd()
        .args(["config", dir.path().join("absent.ini").to_str().unwrap(), "--get", "a.b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Configuration error: No configuration could be loaded"));
}

#[test]
fn test_unpack_into_current_directory() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    write_file(&src, "configure", "#!/bin/sh\n");
    let tarball = dir.path().join("pkg-2.0.tar.gz");
    {
        let file = fs::File::create(&tarball).unwrap();
        let enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(enc);
        builder.append_dir_all("pkg-2.0", &src).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
    }
    let notes = write_file(dir.path(), "NOTES", "plain text");
    let work = dir.path().join("work");
    fs::create_dir(&work).unwrap();

    osgbuild_cmd()
        .current_dir(&work)
        .args(["unpack", tarball.to_str().unwrap(), &notes])
        .assert()
        .success()
        .stdout(predicate::str::contains("extracted"))
        .stdout(predicate::str::contains("skipped"));
    assert!(work.join("pkg-2.0/configure").is_file());
}

#[test]
fn test_unpack_failure_exit_code() {
    let dir = tempdir().unwrap();
    let broken = write_file(dir.path(), "broken.tgz", "not gzip");
    osgbuild_cmd()
        .current_dir(dir.path())
        .args(["unpack", &broken])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 1 archives failed to unpack"));
}

#[test]
fn test_dver_runs() {
    osgbuild_cmd().arg("dver").assert().success();
    osgbuild_cmd()
        .args(["dver", "--release"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}
