//! # osgbuild UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Small terminal helpers for the interactive parts of the build tooling.
//!
//! - **`prompt`**: `ask` and `ask_yn`, reading a choice from the user.
//! - **`table`**: `screen_columns`, `print_line` and `print_table`, laying
//!   text out to the terminal width.
//!
//! Both submodules write to any `std::io::Write` so callers (and tests) choose
//! where output goes.
//!

pub mod prompt;
pub mod table;

pub use prompt::{ask, ask_yn};
pub use table::{print_line, print_table, screen_columns};
