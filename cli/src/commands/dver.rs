//! # Dver Command (`osgbuild dver`)
//!
//! File: cli/src/commands/dver.rs
//!
//! Prints the local distro version tag (`el9`, `fc40`), or an empty line when
//! it cannot be determined.
//!
use clap::Parser;
use osgbuild::common::system::{local_machine_dver, local_machine_release};
use osgbuild::core::error::Result;

/// Arguments for the `dver` subcommand.
#[derive(Parser, Debug)]
pub struct DverArgs {
    /// Print the major release number (e.g. 9) instead of the tag.
    #[arg(long)]
    release: bool,
}

/// Handler for `osgbuild dver`.
pub fn handle_dver(args: DverArgs) -> Result<i32> {
    if args.release {
        println!("{}", local_machine_release());
    } else {
        println!("{}", local_machine_dver());
    }
    Ok(0)
}
