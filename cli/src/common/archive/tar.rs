//! # osgbuild TAR Extraction (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Extracts plain and gzipped tarballs in-process, without spawning `tar`.
//! Upstream source tarballs are overwhelmingly `.tar.gz`, so this is the common
//! path of `super_unpack`.
//!
//! ## Architecture
//!
//! The module leverages the `tar` crate for reading the archive structure and
//! the `flate2` crate for Gzip decompression. Entries are unpacked below the
//! destination directory; the `tar` crate refuses entries that would escape it
//! (absolute paths or `..` components).
//!
use crate::core::error::Result;
use anyhow::Context;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Extracts an uncompressed `.tar` archive into `dest`.
pub fn extract_tar(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).with_context(|| format!("Failed to open archive {:?}", archive))?;
    unpack(file, archive, dest)
}

/// Extracts a gzipped tarball (`.tar.gz`, `.tgz`) into `dest`.
pub fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).with_context(|| format!("Failed to open archive {:?}", archive))?;
    unpack(GzDecoder::new(file), archive, dest)
}

fn unpack<R: Read>(reader: R, archive: &Path, dest: &Path) -> Result<()> {
    tar::Archive::new(reader)
        .unpack(dest)
        .with_context(|| format!("Failed to extract {:?} into {:?}", archive, dest))?;
    info!("Extracted {:?} into {:?}", archive, dest);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Builds a tarball of `src` at `out`, gzipped when `gzip` is set.
    pub(crate) fn make_tarball(src: &Path, out: &Path, gzip: bool) -> Result<()> {
        let file = File::create(out)?;
        if gzip {
            let enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
            let mut builder = tar::Builder::new(enc);
            builder.append_dir_all("pkg-1.0", src)?;
            builder.into_inner()?.finish()?;
        } else {
            let mut builder = tar::Builder::new(file);
            builder.append_dir_all("pkg-1.0", src)?;
            builder.finish()?;
        }
        Ok(())
    }

    fn sample_tree() -> Result<(tempfile::TempDir, PathBuf)> {
        let dir = tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("subdir"))?;
        fs::write(src.join("README"), "hello")?;
        fs::write(src.join("subdir/main.c"), "int main(void) { return 0; }")?;
        Ok((dir, src))
    }

    #[test]
    fn test_extract_tar_gz() -> Result<()> {
        let (dir, src) = sample_tree()?;
        let tarball = dir.path().join("pkg-1.0.tar.gz");
        make_tarball(&src, &tarball, true)?;
        let dest = dir.path().join("out");
        fs::create_dir(&dest)?;

        extract_tar_gz(&tarball, &dest)?;
        assert_eq!(fs::read_to_string(dest.join("pkg-1.0/README"))?, "hello");
        assert!(dest.join("pkg-1.0/subdir/main.c").is_file());
        Ok(())
    }

    #[test]
    fn test_extract_plain_tar() -> Result<()> {
        let (dir, src) = sample_tree()?;
        let tarball = dir.path().join("pkg-1.0.tar");
        make_tarball(&src, &tarball, false)?;
        let dest = dir.path().join("out");
        fs::create_dir(&dest)?;

        extract_tar(&tarball, &dest)?;
        assert!(dest.join("pkg-1.0/README").is_file());
        Ok(())
    }

    #[test]
    fn test_corrupt_archive_fails() -> Result<()> {
        let dir = tempdir()?;
        let bogus = dir.path().join("bogus.tar.gz");
        fs::write(&bogus, "definitely not gzip")?;
        let err = extract_tar_gz(&bogus, dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to extract"));
        Ok(())
    }
}
