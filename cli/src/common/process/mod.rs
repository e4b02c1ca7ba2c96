//! # osgbuild Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process/mod.rs
//!
//! ## Overview
//!
//! This module runs external commands for the build orchestration code. Every
//! entry point is synchronous: the calling thread blocks until the child (or
//! every child of a pipeline) has exited. There is no timeout or cancellation
//! at this layer.
//!
//! ## Architecture
//!
//! - **`command`**: `CommandSpec` (argument vector or command string),
//!   `ExecOptions` and `Redirect`, plus the shared `Command` setup.
//! - **`call`**: `unchecked_call` returns the exit status; `checked_call` fails
//!   on a nonzero status.
//! - **`capture`**: `checked_backtick`, `backtick` and `sbacktick` capture
//!   standard output as text.
//! - **`pipeline`**: `unchecked_pipeline` and `checked_pipeline` connect
//!   commands with pipes and report the first nonzero status in list order.
//! - **`locale`**: C-locale environment forcing and total byte-to-text decoding.
//!
//! Failures surface as `BuildError`: `CalledProcess { command, status, output }`
//! for nonzero exits, `Spawn` when a child cannot be started, `BadCommand` when a
//! command string cannot be tokenized. Every executor traces the command it
//! spawns and the resulting status at `debug` level.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use osgbuild::common::process::{checked_backtick, checked_call, ExecOptions};
//!
//! # fn run() -> Result<(), osgbuild::core::error::BuildError> {
//! let options = ExecOptions::default();
//! checked_call(["git", "fetch", "--tags"], &options)?;
//! let head = checked_backtick("git rev-parse HEAD", &options)?;
//! println!("{head}");
//! # Ok(())
//! # }
//! ```
//!

mod call;
mod capture;
mod command;
mod locale;
mod pipeline;

pub use call::{checked_call, unchecked_call};
pub use capture::{backtick, checked_backtick, sbacktick};
pub use command::{CommandSpec, ExecOptions, Redirect, SHELL};
pub use locale::{c_locale_env, decode_output, C_LOCALE_VARS};
pub use pipeline::{checked_pipeline, pipeline_status, render_pipeline, unchecked_pipeline};

/// Quotes `word` for safe inclusion in a `/bin/sh` command string.
///
/// Words containing a NUL byte cannot be represented and are rejected.
pub fn shell_quote(word: &str) -> crate::core::error::ProcessResult<String> {
    shlex::try_quote(word)
        .map(|quoted| quoted.into_owned())
        .map_err(|_| crate::core::error::BuildError::BadCommand(format!("cannot quote {:?}", word)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain.tar.gz").unwrap(), "plain.tar.gz");
        assert_eq!(shell_quote("with space.zip").unwrap(), "'with space.zip'");
        assert!(shell_quote("nul\0byte").is_err());
    }
}
