//! # Working Directory Navigation
//!
//! File: cli/src/common/fs/dirs.rs
//!
//! ## Overview
//!
//! Two ways of moving the process around the filesystem while a build step
//! runs:
//!
//! - **`DirStack`**: `pushd`/`popd` in the style of bash. The stack is an
//!   ordinary value owned by whoever navigates, not a global.
//! - **`ChdirGuard`**: changes directory for a scope and changes back when the
//!   guard is dropped, on every exit path (normal return, `?`, panic).
//!
//! The working directory is process-wide state. Neither type locks it; callers
//! running several threads must serialize navigation themselves.
//!
//! ```rust,no_run
//! use osgbuild::common::fs::dirs::{with_dir, DirStack};
//!
//! # fn run() -> osgbuild::core::error::Result<()> {
//! let mut stack = DirStack::new();
//! stack.pushd("_build")?;
//! // ... work inside _build ...
//! stack.popd()?;
//!
//! let listing = with_dir("/tmp", || Ok(std::fs::read_dir(".")?.count()))?;
//! # let _ = listing;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{BuildError, Result};
use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A bash-style directory stack.
#[derive(Debug, Default)]
pub struct DirStack {
    stack: Vec<PathBuf>,
}

impl DirStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes to `dir` and pushes the previous working directory.
    /// Nothing is pushed if the change fails.
    pub fn pushd(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        let previous = env::current_dir().context("Failed to get current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("Failed to change directory to {:?}", dir))?;
        debug!("pushd {:?} (from {:?})", dir, previous);
        self.stack.push(previous);
        Ok(())
    }

    /// Pops the top directory and changes to it, returning it.
    ///
    /// The entry is popped even if changing to it fails.
    ///
    /// # Errors
    ///
    /// `BuildError::DirStackEmpty` if there is nothing to pop.
    pub fn popd(&mut self) -> Result<PathBuf> {
        let dir = self.stack.pop().ok_or(BuildError::DirStackEmpty)?;
        env::set_current_dir(&dir)
            .with_context(|| format!("Failed to change directory to {:?}", dir))?;
        debug!("popd {:?}", dir);
        Ok(dir)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Restores the previous working directory when dropped.
#[derive(Debug)]
#[must_use = "the directory is restored as soon as the guard is dropped"]
pub struct ChdirGuard {
    previous: PathBuf,
}

impl ChdirGuard {
    /// Records the current directory and changes to `dir`.
    pub fn enter(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let previous = env::current_dir().context("Failed to get current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("Failed to change directory to {:?}", dir))?;
        Ok(Self { previous })
    }

    /// The directory that will be restored.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for ChdirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!("Failed to restore working directory {:?}: {}", self.previous, e);
        }
    }
}

/// Runs `f` with `dir` as the working directory, restoring the previous one
/// afterwards whether `f` succeeds, fails or panics.
pub fn with_dir<T>(dir: impl AsRef<Path>, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let _guard = ChdirGuard::enter(dir)?;
    f()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::tempdir;

    // The working directory is shared by every test thread.
    static CWD_LOCK: Mutex<()> = Mutex::new(());

    fn lock_cwd() -> MutexGuard<'static, ()> {
        CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn cwd() -> PathBuf {
        env::current_dir().unwrap().canonicalize().unwrap()
    }

    #[test]
    fn test_pushd_popd() -> Result<()> {
        let _lock = lock_cwd();
        let start = cwd();
        let a = tempdir()?;
        let b = tempdir()?;
        let mut stack = DirStack::new();

        stack.pushd(a.path())?;
        assert_eq!(cwd(), a.path().canonicalize()?);
        stack.pushd(b.path())?;
        assert_eq!(cwd(), b.path().canonicalize()?);
        assert_eq!(stack.len(), 2);

        stack.popd()?;
        assert_eq!(cwd(), a.path().canonicalize()?);
        stack.popd()?;
        assert_eq!(cwd(), start);
        assert!(stack.is_empty());
        Ok(())
    }

    #[test]
    fn test_popd_empty_stack() {
        let _lock = lock_cwd();
        let err = DirStack::new().popd().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::DirStackEmpty)
        ));
    }

    #[test]
    fn test_failed_pushd_pushes_nothing() {
        let _lock = lock_cwd();
        let start = cwd();
        let mut stack = DirStack::new();
        assert!(stack.pushd("/nonexistent/osgbuild/dir").is_err());
        assert!(stack.is_empty());
        assert_eq!(cwd(), start);
    }

    #[test]
    fn test_guard_restores_on_error_path() -> Result<()> {
        let _lock = lock_cwd();
        let start = cwd();
        let dir = tempdir()?;
        let result: Result<()> = with_dir(dir.path(), || {
            assert_eq!(cwd(), dir.path().canonicalize()?);
            anyhow::bail!("build step failed")
        });
        assert!(result.is_err());
        assert_eq!(cwd(), start);
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let _lock = lock_cwd();
        let start = cwd();
        let dir = tempdir().unwrap();
        let path = dir.path().to_path_buf();
        let outcome = std::panic::catch_unwind(move || {
            let _guard = ChdirGuard::enter(&path).unwrap();
            panic!("boom");
        });
        assert!(outcome.is_err());
        assert_eq!(cwd(), start);
    }
}
