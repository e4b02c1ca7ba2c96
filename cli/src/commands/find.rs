//! # Find Command (`osgbuild find`)
//!
//! File: cli/src/commands/find.rs
//!
//! Prints where a data file would be found. Without `--path`, the default
//! search path is used (`.`, `~/.osg-build`, `/etc/osg-build`,
//! `/usr/share/osg-build`).
//!
use clap::Parser;
use osgbuild::common::fs::search::find_files;
use osgbuild::core::error::Result;
use tracing::info;

/// Arguments for the `find` subcommand.
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Print every match instead of only the first.
    #[arg(long)]
    all: bool,
    /// Fail if the file is not found anywhere.
    #[arg(long)]
    strict: bool,
    /// Directory to search; repeat to build a search path.
    #[arg(long = "path", value_name = "DIR")]
    paths: Vec<String>,
    /// The file name to look for.
    filename: String,
}

/// Handler for `osgbuild find`.
pub fn handle_find(args: FindArgs) -> Result<i32> {
    let paths = (!args.paths.is_empty()).then_some(args.paths.as_slice());
    let found = find_files(&args.filename, paths, args.strict)?;
    if found.is_empty() {
        info!("{} not found", args.filename);
    }
    let shown = if args.all { found.len() } else { found.len().min(1) };
    for path in &found[..shown] {
        println!("{}", path.display());
    }
    Ok(0)
}
