//! # osgbuild Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the osgbuild utility
//! layer. It provides one structured taxonomy (`BuildError`) for failures the
//! callers are expected to inspect, plus a `Result<T>` alias over `anyhow` for
//! application-level code that only needs to add context and propagate.
//!
//! ## Architecture
//!
//! - `BuildError`: a `thiserror` enum. The process executors return it directly
//!   (see `ProcessResult<T>`) so orchestration code can match on
//!   `BuildError::CalledProcess` and read its `command`, `status` and `output`
//!   without downcasting.
//! - `Result<T>`: `anyhow::Result<T>`, used by the filesystem, configuration and
//!   CLI code. A `BuildError` converts into it with `?`.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use osgbuild::common::process::{checked_backtick, ExecOptions};
//! use osgbuild::core::error::BuildError;
//!
//! match checked_backtick("rpm -q kernel", &ExecOptions::default()) {
//!     Ok(version) => println!("{version}"),
//!     Err(BuildError::CalledProcess { status, output, .. }) => {
//!         eprintln!("rpm exited {status}: {}", output.unwrap_or_default());
//!     }
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the osgbuild utility layer.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A spawned command (or pipeline) exited with a nonzero status.
    /// `output` is only present for the capturing executors.
    #[error("Error in called process({command}): subprocess returned {status}.\nOutput: {}", display_output(.output))]
    CalledProcess {
        command: String,
        status: i32,
        output: Option<String>,
    },

    #[error("Failed to start process({command}): {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command: {0}")]
    BadCommand(String),

    #[error("File '{filename}' not found in search path: {}", .paths.join(", "))]
    NotFoundInSearchPath {
        filename: String,
        paths: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory stack empty")]
    DirStackEmpty,

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

impl BuildError {
    /// The exit status carried by a `CalledProcess` error.
    pub fn status(&self) -> Option<i32> {
        match self {
            BuildError::CalledProcess { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn display_output(output: &Option<String>) -> &str {
    output.as_deref().unwrap_or("None")
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

/// Result type of the process executors. Failures stay typed so callers can
/// inspect the exit status and captured output of a failed command.
pub type ProcessResult<T> = std::result::Result<T, BuildError>;
