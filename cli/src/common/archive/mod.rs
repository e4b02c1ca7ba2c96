//! # osgbuild Archive Utilities (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Unpacks upstream source archives into a build directory. Packagers drop
//! tarballs, zips and source RPMs next to their spec files; `super_unpack`
//! extracts all of them with one call.
//!
//! ## Architecture
//!
//! - **`tar`**: In-process extraction of `.tar` and gzipped tarballs using the
//!   `tar` and `flate2` crates.
//! - **`unpack`**: `super_unpack`, dispatching each file by extension to the
//!   `tar` submodule, to an external tool, or to a two-stage pipeline.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use osgbuild::common::archive::{super_unpack, UnpackStatus};
//! use std::path::Path;
//!
//! let results = super_unpack(&["foo-1.0.tar.gz", "patches.zip"], Path::new("_build"));
//! for (archive, status) in results {
//!     if status != UnpackStatus::Extracted {
//!         eprintln!("{}: {:?}", archive.display(), status);
//!     }
//! }
//! ```
//!

pub mod tar;
pub mod unpack;

pub use unpack::{archive_suffix, super_unpack, UnpackStatus};
