//! # Output Capture ("backtick")
//!
//! File: cli/src/common/process/capture.rs
//!
//! ## Overview
//!
//! Runs a command with its standard output captured, like shell command
//! substitution. Three entry points share one implementation:
//!
//! - **`checked_backtick`**: returns the output, or `BuildError::CalledProcess`
//!   carrying the output when the command exits nonzero.
//! - **`backtick`**: returns the output regardless of exit status.
//! - **`sbacktick`**: returns `(output, status)`.
//!
//! ## Behavior
//!
//! - String commands are split with shell quoting rules unless `shell` is set.
//! - With `clocale` (the default), the child runs with `LC_ALL=C` and `LANG=C`
//!   layered over the `env` option or the current environment.
//! - With `err2out`, standard error goes into the same pipe as standard output.
//! - Output is decoded with `decode_output` and trimmed unless `nostrip` is set.
//!
//! ```rust,no_run
//! use osgbuild::common::process::{sbacktick, ExecOptions};
//!
//! let (arch, status) = sbacktick("uname -m", &ExecOptions::default())?;
//! assert_eq!(status, 0);
//! println!("building for {arch}");
//! # Ok::<(), osgbuild::core::error::BuildError>(())
//! ```
//!
use super::command::{exit_code, prepare, spawn_error, CommandSpec, ExecOptions};
use super::locale::{c_locale_env, decode_output};
use crate::core::error::{BuildError, ProcessResult};
use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Runs a command and returns its captured standard output as text.
///
/// # Errors
///
/// - `BuildError::CalledProcess` with `output` set when the command exits nonzero.
/// - `BuildError::Spawn` / `BuildError::BadCommand` when it cannot be started.
pub fn checked_backtick(cmd: impl Into<CommandSpec>, options: &ExecOptions) -> ProcessResult<String> {
    let spec = cmd.into();
    let mut command = prepare(&spec, options)?;
    if options.clocale {
        command.env_clear().envs(c_locale_env(options.env.as_ref()));
    }
    command.stdin(options.stdin.input().map_err(|e| spawn_error(&spec, e))?);

    debug!("Running `{}`", spec);
    let (status, raw) = if options.err2out {
        capture_merged(&spec, command)?
    } else {
        command
            .stdout(Stdio::piped())
            .stderr(options.stderr.output().map_err(|e| spawn_error(&spec, e))?);
        let output = command.output().map_err(|e| spawn_error(&spec, e))?;
        (output.status, output.stdout)
    };
    let status = exit_code(status);
    debug!("Subprocess returned {}", status);

    let mut output = decode_output(&raw);
    if !options.nostrip {
        output = output.trim().to_string();
    }

    if status != 0 {
        return Err(BuildError::CalledProcess {
            command: spec.to_string(),
            status,
            output: Some(output),
        });
    }
    Ok(output)
}

/// Like `checked_backtick`, but a nonzero exit is not an error: the output
/// captured up to that point is returned.
pub fn backtick(cmd: impl Into<CommandSpec>, options: &ExecOptions) -> ProcessResult<String> {
    match checked_backtick(cmd, options) {
        Err(BuildError::CalledProcess { output, .. }) => Ok(output.unwrap_or_default()),
        other => other,
    }
}

/// Like `checked_backtick`, but returns `(output, status)` where `status` is
/// `0` on success or the command's nonzero exit status.
pub fn sbacktick(cmd: impl Into<CommandSpec>, options: &ExecOptions) -> ProcessResult<(String, i32)> {
    match checked_backtick(cmd, options) {
        Ok(output) => Ok((output, 0)),
        Err(BuildError::CalledProcess { output, status, .. }) => {
            Ok((output.unwrap_or_default(), status))
        }
        Err(other) => Err(other),
    }
}

/// Spawns `command` with stdout and stderr both writing into one pipe and
/// reads it to EOF.
fn capture_merged(spec: &CommandSpec, mut command: Command) -> ProcessResult<(ExitStatus, Vec<u8>)> {
    let (mut reader, writer) = std::io::pipe().map_err(|e| spawn_error(spec, e))?;
    let err_writer = writer.try_clone().map_err(|e| spawn_error(spec, e))?;
    command.stdout(writer).stderr(err_writer);

    let mut child = command.spawn().map_err(|e| spawn_error(spec, e))?;
    // The write ends live in `command`; EOF only arrives once they are closed here.
    drop(command);

    let mut captured = Vec::new();
    let read = reader.read_to_end(&mut captured);
    let status = child.wait().map_err(|e| spawn_error(spec, e))?;
    read.map_err(|e| spawn_error(spec, e))?;
    Ok((status, captured))
}
