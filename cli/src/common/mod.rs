//! # osgbuild Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the build tooling and by the `osgbuild` command
//! handlers. The centerpiece is `process`, the checked subprocess and pipeline
//! layer; the remaining modules are the small helpers that build steps lean on.
//!
//! ## Architecture
//!
//! - **`process`**: Run commands and pipelines, checked or unchecked, capturing
//!   output under a forced C locale. Raises `BuildError::CalledProcess` on failure.
//! - **`fs`**: Whole-file I/O, atomic writes, search path lookup, backups,
//!   and `DirStack` / `ChdirGuard` directory navigation.
//! - **`archive`**: `super_unpack`, extracting source archives by extension.
//! - **`ui`**: Prompts and terminal-width tables.
//! - **`system`**: Distro version detection from os-release.
//! - **`text`**: NVR splitting, URL detection, joining helpers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use osgbuild::common::{fs, process};
//! use osgbuild::common::process::ExecOptions;
//! use std::path::Path;
//!
//! # fn run() -> osgbuild::core::error::Result<()> {
//! let revision = process::checked_backtick("git rev-parse HEAD", &ExecOptions::default())?;
//! fs::io::unslurp(Path::new("REVISION"), &revision)?;
//! # Ok(())
//! # }
//! ```
//!

/// Source archive extraction.
pub mod archive;
/// Filesystem operations (I/O, search path, backups, directory navigation).
pub mod fs;
/// Checked and unchecked execution of commands and pipelines.
pub mod process;
/// Distro detection.
pub mod system;
pub mod text;
/// Terminal prompts and tables.
pub mod ui;
