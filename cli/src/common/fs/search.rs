//! # Search Path Lookup
//!
//! File: cli/src/common/fs/search.rs
//!
//! Finds data files (mock configs, templates, default INI files) by walking an
//! ordered list of directories, and finds executables on `PATH`.
//!
use crate::core::error::{BuildError, ProcessResult};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories searched by `find_file`/`find_files` when no path is given.
/// Entries may start with `~`, which is expanded to the home directory.
pub const DATA_FILE_SEARCH_PATH: &[&str] = &[
    ".",
    "~/.osg-build",
    "/etc/osg-build",
    "/usr/share/osg-build",
];

/// Looks for `filename` in each directory of `paths` (or
/// `DATA_FILE_SEARCH_PATH`) and returns every regular file found, in search
/// order.
///
/// # Errors
///
/// With `strict` set, `BuildError::NotFoundInSearchPath` when nothing matched.
pub fn find_files<P: AsRef<str>>(
    filename: &str,
    paths: Option<&[P]>,
    strict: bool,
) -> ProcessResult<Vec<PathBuf>> {
    let dirs: Vec<String> = match paths {
        Some(paths) => paths.iter().map(|p| expand(p.as_ref())).collect(),
        None => DATA_FILE_SEARCH_PATH.iter().map(|p| expand(p)).collect(),
    };

    let matches: Vec<PathBuf> = dirs
        .iter()
        .map(|dir| Path::new(dir).join(filename))
        .filter(|candidate| candidate.is_file())
        .collect();
    debug!("Search for {} in [{}]: {:?}", filename, dirs.join(", "), matches);

    if matches.is_empty() && strict {
        return Err(BuildError::NotFoundInSearchPath {
            filename: filename.to_string(),
            paths: dirs,
        });
    }
    Ok(matches)
}

/// First match of `find_files`, or `None`.
pub fn find_file<P: AsRef<str>>(
    filename: &str,
    paths: Option<&[P]>,
    strict: bool,
) -> ProcessResult<Option<PathBuf>> {
    Ok(find_files(filename, paths, strict)?.into_iter().next())
}

/// Locates an executable.
///
/// A `program` containing a path separator is returned as is if it names an
/// executable regular file. A bare name is looked up in each `PATH` directory.
pub fn which(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if program.contains(std::path::MAIN_SEPARATOR) {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|full| is_executable(full))
}

fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        true
    }
}

fn expand(dir: &str) -> String {
    shellexpand::tilde(dir).into_owned()
}
