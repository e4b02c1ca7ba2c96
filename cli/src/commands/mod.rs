//! # osgbuild Command Modules (`commands`)
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per `osgbuild` subcommand. Each defines a clap `Args` struct and
//! a `handle_*` function that drives the library and returns the process exit
//! status. Errors propagate to `main`, which prints them and exits 1.
//!
//! - `run`: capture one command's output (checked, or with `--status`).
//! - `pipe`: run a checked pipeline of commands separated by `|`.
//! - `find`: look a file up in the data file search path.
//! - `unpack`: extract source archives into the current directory.
//! - `dver`: print the local distro version tag.
//! - `config`: read an option from layered INI files.
//!

/// Capture a single command's output.
pub mod run;
/// Run a pipeline of commands.
pub mod pipe;
/// Search path lookup.
pub mod find;
/// Archive extraction.
pub mod unpack;
/// Local distro version.
pub mod dver;
/// INI option lookup.
pub mod config;

use osgbuild::common::process::CommandSpec;

/// Builds a command from command-line words: a single word is a command
/// string, several words are an argument vector.
pub(crate) fn command_from_words(mut words: Vec<String>) -> CommandSpec {
    if words.len() == 1 {
        CommandSpec::line(words.remove(0))
    } else {
        CommandSpec::Argv(words)
    }
}
