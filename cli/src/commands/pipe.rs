//! # Pipe Command (`osgbuild pipe`)
//!
//! File: cli/src/commands/pipe.rs
//!
//! Runs a checked pipeline. Commands are separated by a literal `|` word,
//! which must be quoted so the invoking shell passes it through:
//!
//! ```bash
//! osgbuild pipe --stdout sources.txt -- 'rpm2cpio foo.src.rpm' '|' 'cpio -t'
//! osgbuild pipe --cwd _build -- xz -d -c foo.tar.xz '|' tar xf -
//! ```
//!
//! Each segment follows the same rule as `osgbuild run`: one word is a command
//! string, several words are an argument vector.
//!
use super::command_from_words;
use osgbuild::core::error::Result;
use anyhow::bail;
use clap::Parser;
use osgbuild::common::process::{checked_pipeline, render_pipeline, CommandSpec, ExecOptions, Redirect};
use std::path::PathBuf;
use tracing::info;

/// Word separating pipeline stages.
const PIPE: &str = "|";

/// Arguments for the `pipe` subcommand.
#[derive(Parser, Debug)]
pub struct PipeArgs {
    /// Feed this file to the first command's standard input.
    #[arg(long, value_name = "FILE")]
    stdin: Option<PathBuf>,
    /// Write the last command's standard output to this file.
    #[arg(long, value_name = "FILE")]
    stdout: Option<PathBuf>,
    /// Working directory for every command.
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,
    /// Commands separated by '|'.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    commands: Vec<String>,
}

/// Handler for `osgbuild pipe`.
pub fn handle_pipe(args: PipeArgs) -> Result<i32> {
    let cmds = split_stages(args.commands)?;
    let mut options = ExecOptions::new();
    if let Some(stdin) = args.stdin {
        options = options.stdin(Redirect::File(stdin));
    }
    if let Some(stdout) = args.stdout {
        options = options.stdout(Redirect::File(stdout));
    }
    if let Some(cwd) = &args.cwd {
        options = options.cwd(cwd);
    }
    info!("Running pipeline {}", render_pipeline(&cmds));
    checked_pipeline(&cmds, &options)?;
    Ok(0)
}

fn split_stages(words: Vec<String>) -> Result<Vec<CommandSpec>> {
    let mut stages = vec![Vec::new()];
    for word in words {
        if word == PIPE {
            stages.push(Vec::new());
        } else if let Some(current) = stages.last_mut() {
            current.push(word);
        }
    }
    if stages.iter().any(Vec::is_empty) {
        bail!("Empty command in pipeline");
    }
    Ok(stages.into_iter().map(command_from_words).collect())
}
