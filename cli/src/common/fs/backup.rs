//! # osgbuild File Backups
//!
//! File: cli/src/common/fs/backup.rs
//!
//! ## Overview
//!
//! Before the build tooling regenerates a file the user may have edited (a
//! spec file, a local mock config), it moves or copies the existing version
//! aside. This module provides that step as `safe_make_backup`.
//!
//! ## Architecture
//!
//! - The backup name is the original name plus a suffix: `.bak` when a simple
//!   suffix is requested, otherwise a timestamp such as `.240131235959~`
//!   (`chrono`, format `.%y%m%d%H%M%S~`).
//! - The original is either renamed (`move_original = true`) or copied.
//! - A missing original is not an error: there is nothing to back up.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Suffix used when `simple_suffix` is requested.
pub const SIMPLE_BACKUP_SUFFIX: &str = ".bak";

/// Backs up `path` if it exists, returning the backup location.
///
/// # Arguments
///
/// * `path` - The file to back up.
/// * `move_original` - Rename the file instead of copying it.
/// * `simple_suffix` - Use `.bak` instead of a timestamp suffix.
///
/// # Returns
///
/// * `Ok(Some(backup))` - The file was backed up to `backup`.
/// * `Ok(None)` - `path` did not exist.
///
/// # Errors
///
/// Any I/O failure other than the original being absent.
pub fn safe_make_backup(path: &Path, move_original: bool, simple_suffix: bool) -> Result<Option<PathBuf>> {
    let suffix = if simple_suffix {
        SIMPLE_BACKUP_SUFFIX.to_string()
    } else {
        chrono::Local::now().format(".%y%m%d%H%M%S~").to_string()
    };
    let mut backup_name = path.as_os_str().to_os_string();
    backup_name.push(&suffix);
    let backup_path = PathBuf::from(backup_name);

    let result = if move_original {
        fs::rename(path, &backup_path)
    } else {
        fs::copy(path, &backup_path).map(|_| ())
    };

    match result {
        Ok(()) => {
            info!("Backed up {:?} to {:?}", path, backup_path);
            Ok(Some(backup_path))
        }
        Err(e) if e.kind() == ErrorKind::NotFound && !path.exists() => {
            debug!("No file to back up at {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to back up {:?} to {:?}", path, backup_path)),
    }
}
