//! # osgbuild Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every other part of the crate:
//!
//! - `error`: `BuildError`, the `Result` alias used by application code, and the
//!   typed `ProcessResult` returned by the process layer.
//! - `config`: `IniConfiguration`, layered INI files with `[DEFAULT]` fallback.
//!
//! ## Usage
//!
//! ```rust
//! use osgbuild::core::config::IniConfiguration;
//! use osgbuild::core::error::{BuildError, Result};
//! ```
//!
pub mod config;
pub mod error;
