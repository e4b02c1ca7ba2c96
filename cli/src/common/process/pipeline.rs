//! # Pipeline Execution
//!
//! File: cli/src/common/process/pipeline.rs
//!
//! ## Overview
//!
//! Runs an ordered list of commands connected like a shell pipeline: the
//! standard output of command `i` feeds the standard input of command `i + 1`.
//! All commands run concurrently as OS processes; the caller blocks until every
//! one of them has exited.
//!
//! ## Architecture
//!
//! - Command `0` reads from the `stdin` option, the last command writes to the
//!   `stdout` option, every other option applies to all commands. A `stderr`
//!   file is opened once and shared, so no stage overwrites another's messages.
//! - Each intermediate pipe is owned by exactly one value at a time: the read end
//!   moves from the upstream `Child` into the downstream `Command`, and that
//!   `Command` is dropped right after spawning so the parent holds no copy. A
//!   downstream reader therefore sees EOF as soon as its writer exits.
//! - Spawned children are held by `RunningPipeline`. If a later spawn fails, its
//!   `Drop` kills and reaps the children already started.
//! - The overall status is the first nonzero status in list order, not in
//!   completion order (`pipeline_status`).
//!
//! ```rust,no_run
//! use osgbuild::common::process::{checked_pipeline, CommandSpec, ExecOptions, Redirect};
//!
//! let cmds = [
//!     CommandSpec::from("xz -d -c sources.tar.xz"),
//!     CommandSpec::from("tar xf -"),
//! ];
//! checked_pipeline(&cmds, &ExecOptions::default().stdout(Redirect::Null))?;
//! # Ok::<(), osgbuild::core::error::BuildError>(())
//! ```
//!
use super::command::{exit_code, prepare, spawn_error, CommandSpec, ExecOptions, Redirect};
use crate::core::error::{BuildError, ProcessResult};
use std::fs::File;
use std::process::{Child, ChildStdout, Stdio};
use tracing::debug;

/// Runs `cmds` as a pipeline and returns its aggregate status: `0` if every
/// command exited zero, otherwise the first nonzero status in list order.
///
/// A single-command pipeline behaves exactly like `unchecked_call`.
///
/// # Errors
///
/// `BuildError::BadCommand` for an empty list or an unparsable command, and
/// `BuildError::Spawn` when a command cannot be started. A nonzero exit is not
/// an error here.
pub fn unchecked_pipeline(cmds: &[CommandSpec], options: &ExecOptions) -> ProcessResult<i32> {
    if cmds.is_empty() {
        return Err(BuildError::BadCommand("empty pipeline".to_string()));
    }
    debug!("Running {}", render_pipeline(cmds));

    let mut running = RunningPipeline::default();
    let mut upstream: Option<ChildStdout> = None;
    let last = cmds.len() - 1;
    // Opened once so every stage writes through the same file offset.
    let shared_stderr = match &options.stderr {
        Redirect::File(path) => Some(File::create(path).map_err(|e| spawn_error(&cmds[0], e))?),
        _ => None,
    };

    for (i, spec) in cmds.iter().enumerate() {
        let mut command = prepare(spec, options)?;
        let stdin = match upstream.take() {
            Some(pipe) => Stdio::from(pipe),
            None => options.stdin.input().map_err(|e| spawn_error(spec, e))?,
        };
        let stdout = if i == last {
            options.stdout.output().map_err(|e| spawn_error(spec, e))?
        } else {
            Stdio::piped()
        };
        let stderr = match &shared_stderr {
            Some(file) => Stdio::from(file.try_clone().map_err(|e| spawn_error(spec, e))?),
            None => options.stderr.output().map_err(|e| spawn_error(spec, e))?,
        };
        command.stdin(stdin).stdout(stdout).stderr(stderr);

        let mut child = command.spawn().map_err(|e| spawn_error(spec, e))?;
        // Closes the parent's copy of the upstream read end.
        drop(command);
        upstream = child.stdout.take();
        running.children.push(child);
    }

    let statuses = running.wait_all().map_err(|e| spawn_error(&cmds[last], e))?;
    debug!(
        "Subprocesses returned ({})",
        statuses
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    );
    Ok(pipeline_status(&statuses))
}

/// Runs `cmds` as a pipeline and fails with `BuildError::CalledProcess` (no
/// output) when its aggregate status is nonzero.
pub fn checked_pipeline(cmds: &[CommandSpec], options: &ExecOptions) -> ProcessResult<()> {
    let status = unchecked_pipeline(cmds, options)?;
    if status != 0 {
        return Err(BuildError::CalledProcess {
            command: render_pipeline(cmds),
            status,
            output: None,
        });
    }
    Ok(())
}

/// First nonzero status in list order, or `0`.
pub fn pipeline_status(statuses: &[i32]) -> i32 {
    statuses.iter().copied().find(|&s| s != 0).unwrap_or(0)
}

/// Renders a pipeline the way a shell would show it: `a | b | c`.
pub fn render_pipeline(cmds: &[CommandSpec]) -> String {
    cmds.iter()
        .map(CommandSpec::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

#[derive(Default)]
struct RunningPipeline {
    children: Vec<Child>,
}

impl RunningPipeline {
    /// Waits for every child in spawn order and returns their statuses.
    fn wait_all(mut self) -> std::io::Result<Vec<i32>> {
        let waited: Vec<_> = self.children.drain(..).map(|mut c| c.wait()).collect();
        waited
            .into_iter()
            .map(|status| status.map(exit_code))
            .collect()
    }
}

impl Drop for RunningPipeline {
    fn drop(&mut self) {
        for child in &mut self.children {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
