//! # osgbuild Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Utility layer for packaging and build tooling: checked subprocess and
//! pipeline execution with locale forcing and lossless output decoding, plus
//! the file, archive, configuration and terminal helpers that build steps use.
//!
//! The `osgbuild` binary is a thin command-line front end over this library.
//!
//! - `core`: errors and INI configuration.
//! - `common`: process execution and the supporting utilities.
//!
pub mod common;
pub mod core;
