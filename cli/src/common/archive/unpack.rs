//! # Archive Extraction by Extension
//!
//! File: cli/src/common/archive/unpack.rs
//!
//! ## Overview
//!
//! `super_unpack` extracts a list of source archives, choosing how from each
//! file's extension. The first matching suffix in `HANDLERS` wins, so the
//! compound suffixes (`.tar.gz`, `.tar.bz2`) are listed before their tails.
//!
//! - `.tar`, `.tar.gz`, `.tgz`: extracted in-process (`archive::tar`).
//! - `.tar.xz`, `.rpm`: two-stage pipelines (`xz -d f -c | tar xf -`,
//!   `rpm2cpio f | cpio -id`) run by `checked_pipeline`.
//! - Everything else: the matching tool (`unzip`, `bunzip2`, `7z`, ...) run by
//!   `checked_call`.
//!
//! External tools run with the destination as their working directory.
//! Single-file decompressors (`gunzip`, `bunzip2`, `xz -d`, `uncompress`)
//! decompress next to the archive, as they always do.
//!
use super::tar::{extract_tar, extract_tar_gz};
use crate::common::process::{checked_call, checked_pipeline, CommandSpec, ExecOptions};
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Placeholder for the archive path in tool command templates.
const ARCHIVE: &str = "{}";

enum Handler {
    Native(fn(&Path, &Path) -> Result<()>),
    Tool(&'static [&'static str]),
    Pipeline(&'static [&'static [&'static str]]),
}

const HANDLERS: &[(&str, Handler)] = &[
    (".tar.bz2", Handler::Tool(&["tar", "xjf", ARCHIVE])),
    (".tar.gz", Handler::Native(extract_tar_gz)),
    (".bz2", Handler::Tool(&["bunzip2", ARCHIVE])),
    (".rar", Handler::Tool(&["unrar", "x", ARCHIVE])),
    (".gz", Handler::Tool(&["gunzip", ARCHIVE])),
    (".tar", Handler::Native(extract_tar)),
    (".tbz2", Handler::Tool(&["tar", "xjf", ARCHIVE])),
    (".tgz", Handler::Native(extract_tar_gz)),
    (".zip", Handler::Tool(&["unzip", ARCHIVE])),
    (".Z", Handler::Tool(&["uncompress", ARCHIVE])),
    (".7z", Handler::Tool(&["7z", "x", ARCHIVE])),
    (
        ".tar.xz",
        Handler::Pipeline(&[&["xz", "-d", ARCHIVE, "-c"], &["tar", "xf", "-"]]),
    ),
    (".xz", Handler::Tool(&["xz", "-d", ARCHIVE])),
    (
        ".rpm",
        Handler::Pipeline(&[&["rpm2cpio", ARCHIVE], &["cpio", "-id"]]),
    ),
];

/// What happened to one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnpackStatus {
    Extracted,
    /// Extraction was attempted and failed; the message says why.
    Failed(String),
    /// No handler for this file's extension.
    Unsupported,
}

/// Extracts every file in `archives` into `dest`.
///
/// Each archive is handled independently: a failure is recorded in the
/// returned list and the remaining archives are still processed.
pub fn super_unpack<P: AsRef<Path>>(archives: &[P], dest: &Path) -> Vec<(PathBuf, UnpackStatus)> {
    archives
        .iter()
        .map(|archive| {
            let archive = archive.as_ref();
            (archive.to_path_buf(), unpack_one(archive, dest))
        })
        .collect()
}

/// The suffix `super_unpack` would dispatch on for `archive`, if any.
pub fn archive_suffix(archive: &Path) -> Option<&'static str> {
    handler_for(archive).map(|(suffix, _)| *suffix)
}

fn handler_for(archive: &Path) -> Option<&'static (&'static str, Handler)> {
    let name = archive.file_name()?.to_string_lossy();
    HANDLERS.iter().find(|(suffix, _)| name.ends_with(suffix))
}

fn unpack_one(archive: &Path, dest: &Path) -> UnpackStatus {
    let Some((suffix, handler)) = handler_for(archive) else {
        warn!("Don't know how to unpack {:?}; skipping", archive);
        return UnpackStatus::Unsupported;
    };
    info!("Unpacking {:?} ({})", archive, suffix);

    let result = match std::path::absolute(archive) {
        Err(e) => Err(anyhow::Error::new(e)),
        Ok(archive) => match handler {
            Handler::Native(extract) => extract(&archive, dest),
            Handler::Tool(template) => {
                let options = ExecOptions::new().cwd(dest);
                checked_call(fill(template, &archive), &options).map_err(Into::into)
            }
            Handler::Pipeline(stages) => {
                let options = ExecOptions::new().cwd(dest);
                let cmds: Vec<CommandSpec> = stages.iter().map(|t| fill(t, &archive)).collect();
                checked_pipeline(&cmds, &options).map_err(Into::into)
            }
        },
    };

    match result {
        Ok(()) => UnpackStatus::Extracted,
        Err(e) => {
            warn!("Failed to unpack {:?}: {:#}", archive, e);
            UnpackStatus::Failed(format!("{:#}", e))
        }
    }
}

fn fill(template: &[&str], archive: &Path) -> CommandSpec {
    let archive = archive.to_string_lossy();
    CommandSpec::argv(template.iter().map(|word| {
        if *word == ARCHIVE {
            archive.to_string()
        } else {
            word.to_string()
        }
    }))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::archive::tar::tests::make_tarball;
    use crate::common::fs::search::which;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_suffix_dispatch_order() {
        assert_eq!(archive_suffix(Path::new("a-1.0.tar.gz")), Some(".tar.gz"));
        assert_eq!(archive_suffix(Path::new("a-1.0.tar.bz2")), Some(".tar.bz2"));
        assert_eq!(archive_suffix(Path::new("a-1.0.tar.xz")), Some(".tar.xz"));
        assert_eq!(archive_suffix(Path::new("notes.txt.gz")), Some(".gz"));
        assert_eq!(archive_suffix(Path::new("old.Z")), Some(".Z"));
        assert_eq!(archive_suffix(Path::new("pkg-1-1.el9.src.rpm")), Some(".rpm"));
        assert_eq!(archive_suffix(Path::new("README")), None);
    }

    #[test]
    fn test_fill_template() {
        let spec = fill(&["xz", "-d", ARCHIVE, "-c"], Path::new("/srv/my src.tar.xz"));
        assert_eq!(
            spec,
            CommandSpec::argv(["xz", "-d", "/srv/my src.tar.xz", "-c"])
        );
    }

    #[test]
    fn test_native_and_unsupported() -> Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir(&src)?;
        fs::write(src.join("file.txt"), "data")?;
        let tarball = dir.path().join("pkg-1.0.tgz");
        make_tarball(&src, &tarball, true)?;
        let readme = dir.path().join("README.md");
        fs::write(&readme, "not an archive")?;
        let dest = dir.path().join("dest");
        fs::create_dir(&dest)?;

        let results = super_unpack(&[&tarball, &readme], &dest);
        assert_eq!(results[0], (tarball.clone(), UnpackStatus::Extracted));
        assert_eq!(results[1], (readme.clone(), UnpackStatus::Unsupported));
        assert!(dest.join("pkg-1.0/file.txt").is_file());
        Ok(())
    }

    #[test]
    fn test_failure_does_not_stop_later_archives() -> Result<()> {
        let dir = tempdir()?;
        let bad = dir.path().join("broken.tar.gz");
        fs::write(&bad, "garbage")?;
        let src = dir.path().join("src");
        fs::create_dir(&src)?;
        fs::write(src.join("a"), "a")?;
        let good = dir.path().join("good.tar");
        make_tarball(&src, &good, false)?;

        let results = super_unpack(&[&bad, &good], dir.path());
        assert!(matches!(results[0].1, UnpackStatus::Failed(_)));
        assert_eq!(results[1].1, UnpackStatus::Extracted);
        Ok(())
    }

    #[test]
    fn test_gunzip_tool() -> Result<()> {
        if which("gunzip").is_none() {
            return Ok(());
        }
        let dir = tempdir()?;
        let gz = dir.path().join("notes.txt.gz");
        let mut enc = flate2::write::GzEncoder::new(fs::File::create(&gz)?, flate2::Compression::default());
        enc.write_all(b"release notes")?;
        enc.finish()?;

        let results = super_unpack(&[&gz], dir.path());
        assert_eq!(results[0].1, UnpackStatus::Extracted);
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt"))?, "release notes");
        Ok(())
    }

    #[test]
    fn test_tar_xz_pipeline() -> Result<()> {
        if which("xz").is_none() || which("tar").is_none() {
            return Ok(());
        }
        let dir = tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir(&src)?;
        fs::write(src.join("configure"), "#!/bin/sh\n")?;
        let tarball = dir.path().join("pkg-1.0.tar");
        make_tarball(&src, &tarball, false)?;
        let tarball = tarball.to_string_lossy().to_string();
        checked_call(["xz", "-z", tarball.as_str()], &ExecOptions::default())?;
        let dest = dir.path().join("dest");
        fs::create_dir(&dest)?;

        let results = super_unpack(&[dir.path().join("pkg-1.0.tar.xz")], &dest);
        assert_eq!(results[0].1, UnpackStatus::Extracted);
        assert!(dest.join("pkg-1.0/configure").is_file());
        Ok(())
    }
}
