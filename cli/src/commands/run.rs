//! # Run Command (`osgbuild run`)
//!
//! File: cli/src/commands/run.rs
//!
//! Runs one command, captures its standard output under the C locale and
//! prints it. A nonzero exit is an error unless `--status` is given, in which
//! case `osgbuild` exits with the command's own status instead.
//!
//! ```bash
//! osgbuild run 'rpm -q --qf "%{VERSION}" kernel'
//! osgbuild run --shell --err2out 'make 2>&1 | tail -n 5'
//! osgbuild run --status -- grep -q el9 /etc/os-release
//! ```
//!
use super::command_from_words;
use osgbuild::core::error::Result;
use clap::Parser;
use osgbuild::common::process::{checked_backtick, sbacktick, ExecOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Run the command through /bin/sh -c.
    #[arg(long)]
    shell: bool,
    /// Print output exactly as captured, without trimming whitespace.
    #[arg(long)]
    nostrip: bool,
    /// Capture standard error along with standard output.
    #[arg(long)]
    err2out: bool,
    /// Keep the caller's locale instead of forcing LC_ALL=C and LANG=C.
    #[arg(long = "no-clocale")]
    no_clocale: bool,
    /// Exit with the command's status instead of failing on nonzero.
    #[arg(long)]
    status: bool,
    /// Working directory for the command.
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,
    /// The command: one string, or a program followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

/// Handler for `osgbuild run`. Returns the exit status for the process.
pub fn handle_run(args: RunArgs) -> Result<i32> {
    let mut options = ExecOptions::new()
        .shell(args.shell)
        .nostrip(args.nostrip)
        .err2out(args.err2out)
        .clocale(!args.no_clocale);
    if let Some(cwd) = &args.cwd {
        options = options.cwd(cwd);
    }
    let spec = command_from_words(args.command);
    info!("Running {}", spec);

    let (output, status) = if args.status {
        sbacktick(spec, &options)?
    } else {
        (checked_backtick(spec, &options)?, 0)
    };
    print_output(&mut std::io::stdout().lock(), &output, args.nostrip)?;
    Ok(status)
}

/// Writes captured output. Stripped output gets a trailing newline back.
fn print_output<W: Write>(out: &mut W, output: &str, nostrip: bool) -> Result<()> {
    if nostrip {
        write!(out, "{}", output)?;
    } else if !output.is_empty() {
        writeln!(out, "{}", output)?;
    }
    out.flush()?;
    Ok(())
}
