//! # osgbuild System Inspection (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Facts about the machine the build tooling runs on. Currently this is the
//! distribution version tag (`el9`, `fc40`) read from `/etc/os-release`,
//! used to pick default build targets.
//!

pub mod distro;

pub use distro::{local_machine_dver, local_machine_release};
