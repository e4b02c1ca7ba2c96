//! # osgbuild Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes whole-file reads and writes used by the build
//! tooling: reading a file into a string (`slurp`), writing a string out
//! (`unslurp`), writing a file so that readers never observe a half-written
//! version (`atomic_unslurp`), and creating directories on demand
//! (`ensure_dir_exists` / `safe_makedirs`).
//!
//! ## Architecture
//!
//! - **`slurp`** / **`unslurp`**: thin wrappers around `std::fs` that attach the
//!   file name to any error via `anyhow::Context`.
//! - **`atomic_unslurp`**: writes to a `tempfile::NamedTempFile` created in the
//!   destination directory, then persists (renames) it over the destination and
//!   applies the requested permission bits. A failure at any step removes the
//!   temporary file and leaves the destination untouched.
//! - **`ensure_dir_exists`**: creates a directory and its parents unless it
//!   exists, and rejects a path that exists but is not a directory.
//!
//! ```rust,no_run
//! use osgbuild::common::fs::io;
//! use std::path::Path;
//!
//! # fn run() -> osgbuild::core::error::Result<()> {
//! let spec = Path::new("_build/osg-ca-certs.spec");
//! io::safe_makedirs(Path::new("_build"))?;
//! let text = io::slurp(Path::new("osg/osg-ca-certs.spec"))?;
//! io::atomic_unslurp(spec, text.as_bytes(), io::DEFAULT_FILE_MODE)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{BuildError, Result};
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Permission bits applied by `atomic_unslurp` unless told otherwise.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created together with any
/// missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(BuildError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Creates a directory and all its parents unless it already exists.
pub fn safe_makedirs(path: &Path) -> Result<()> {
    ensure_dir_exists(path)
}

/// Returns the contents of a file as a single string.
pub fn slurp(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn unslurp(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Writes `contents` to `path` without ever leaving a half-written file behind.
///
/// The data goes to a temporary file in the same directory, which is then
/// renamed over `path` and given the permission bits `mode` (Unix only).
///
/// # Errors
///
/// Returns an `Err` if the temporary file cannot be created or written, or the
/// rename fails. The temporary file is removed in every error case.
pub fn atomic_unslurp(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
    temp.write_all(contents)
        .and_then(|_| temp.flush())
        .with_context(|| format!("Failed to write temporary file for {:?}", path))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move temporary file over {:?}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .with_context(|| format!("Failed to set permissions on {:?}", path))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    info!("Atomically wrote file: {:?}", path);
    Ok(())
}
