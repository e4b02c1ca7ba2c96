//! # osgbuild Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module acts as the organizational unit for all filesystem-related
//! helpers used by the build tooling: whole-file I/O, search path lookup,
//! backups, and working directory navigation.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`io`**: `slurp`, `unslurp`, `atomic_unslurp`, `ensure_dir_exists` / `safe_makedirs`.
//! - **`search`**: `find_file`, `find_files` over an ordered search path, and `which` over `PATH`.
//! - **`backup`**: `safe_make_backup`, moving or copying a file aside before it is regenerated.
//! - **`dirs`**: `DirStack` (pushd/popd) and `ChdirGuard` (scoped directory change with restore).
//!
//! Import from the specific submodule (e.g., `osgbuild::common::fs::io::slurp`).
//!

/// Whole-file reads and writes and directory creation.
pub mod io;
/// Search path and `PATH` lookup.
pub mod search;
/// Backups of files about to be overwritten.
pub mod backup;
/// Directory stack and scoped working directory changes.
pub mod dirs;
