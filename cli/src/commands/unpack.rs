//! # Unpack Command (`osgbuild unpack`)
//!
//! File: cli/src/commands/unpack.rs
//!
//! Extracts source archives into the current directory. Files with an
//! unrecognized extension are skipped with a warning; any extraction failure
//! makes the command fail after every archive has been tried.
//!
use anyhow::bail;
use clap::Parser;
use osgbuild::common::archive::{super_unpack, UnpackStatus};
use osgbuild::core::error::Result;
use std::path::{Path, PathBuf};

/// Arguments for the `unpack` subcommand.
#[derive(Parser, Debug)]
pub struct UnpackArgs {
    /// Archives to extract.
    #[arg(required = true)]
    archives: Vec<PathBuf>,
}

/// Handler for `osgbuild unpack`.
pub fn handle_unpack(args: UnpackArgs) -> Result<i32> {
    let results = super_unpack(&args.archives, Path::new("."));
    let mut failed = 0;
    for (archive, status) in &results {
        match status {
            UnpackStatus::Extracted => println!("{}: extracted", archive.display()),
            UnpackStatus::Unsupported => println!("{}: skipped (unknown archive type)", archive.display()),
            UnpackStatus::Failed(reason) => {
                eprintln!("{}: {}", archive.display(), reason);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} archives failed to unpack", failed, results.len());
    }
    Ok(0)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_requires_archives() {
        assert!(UnpackArgs::try_parse_from(["unpack"]).is_err());
        let args = UnpackArgs::try_parse_from(["unpack", "a.tgz", "b.zip"]).unwrap();
        assert_eq!(args.archives.len(), 2);
    }
}
