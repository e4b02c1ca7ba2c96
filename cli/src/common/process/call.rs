//! # Single-Command Execution
//!
//! File: cli/src/common/process/call.rs
//!
//! Runs one command with the caller's standard streams (unless redirected) and
//! reports its exit status. `checked_call` turns a nonzero status into
//! `BuildError::CalledProcess`; `unchecked_call` hands the status back.
//!
use super::command::{exit_code, prepare, spawn_error, CommandSpec, ExecOptions};
use crate::core::error::{BuildError, ProcessResult};
use tracing::debug;

/// Runs a command and returns its exit status without judging it.
///
/// Output is not captured. `stdin`, `stdout` and `stderr` follow the options.
///
/// # Errors
///
/// Only when the command cannot be started at all (`BuildError::Spawn`) or
/// cannot be parsed (`BuildError::BadCommand`). A nonzero exit is not an error.
pub fn unchecked_call(cmd: impl Into<CommandSpec>, options: &ExecOptions) -> ProcessResult<i32> {
    let spec = cmd.into();
    run(&spec, options)
}

/// Runs a command and fails with `BuildError::CalledProcess` (no output) when it
/// exits nonzero.
pub fn checked_call(cmd: impl Into<CommandSpec>, options: &ExecOptions) -> ProcessResult<()> {
    let spec = cmd.into();
    let status = run(&spec, options)?;
    if status != 0 {
        return Err(BuildError::CalledProcess {
            command: spec.to_string(),
            status,
            output: None,
        });
    }
    Ok(())
}

fn run(spec: &CommandSpec, options: &ExecOptions) -> ProcessResult<i32> {
    let mut command = prepare(spec, options)?;
    command
        .stdin(options.stdin.input().map_err(|e| spawn_error(spec, e))?)
        .stdout(options.stdout.output().map_err(|e| spawn_error(spec, e))?)
        .stderr(options.stderr.output().map_err(|e| spawn_error(spec, e))?);

    debug!("Running {}", spec);
    let status = command.status().map_err(|e| spawn_error(spec, e))?;
    let status = exit_code(status);
    debug!("Subprocess returned {}", status);
    Ok(status)
}
