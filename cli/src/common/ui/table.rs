//! # Terminal-Width Layout
//!
//! File: cli/src/common/ui/table.rs
//!
//! ## Overview
//!
//! Separator lines and column tables sized to the terminal. The width comes
//! from `COLUMNS` when it is set to a number, otherwise from `stty size`.
//! Anything unusable (unset, unparsable, a query failure, fewer than 10
//! columns) falls back to 80.
//!
//! `print_table` takes a map of header to column values. Headers are sorted,
//! each is underlined with dashes, values within a column are sorted, and
//! shorter columns are padded with empty cells. Every column gets an equal
//! share of the screen width.
//!
use crate::common::process::{backtick, ExecOptions};
use crate::core::error::Result;
use std::collections::BTreeMap;
use std::env;
use std::io::Write;
use tracing::debug;

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_COLUMNS: usize = 80;

const MIN_COLUMNS: usize = 10;

/// The number of columns in the terminal.
pub fn screen_columns() -> usize {
    let columns = match env::var("COLUMNS") {
        Ok(value) => parse_columns(&value),
        Err(_) => stty_columns(),
    };
    columns.unwrap_or(DEFAULT_COLUMNS)
}

fn stty_columns() -> Option<usize> {
    match backtick("stty size", &ExecOptions::default()) {
        // "rows cols"
        Ok(size) => size.split_whitespace().nth(1).and_then(parse_columns),
        Err(e) => {
            debug!("Unable to query terminal size: {}", e);
            None
        }
    }
}

fn parse_columns(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|c| *c >= MIN_COLUMNS)
}

/// Writes a line of dashes one narrower than the screen, so it never wraps.
pub fn print_line<W: Write>(out: &mut W) -> Result<()> {
    write_line(out, screen_columns())
}

/// Writes `columns_by_header` as a table fitted to the screen width.
pub fn print_table<W: Write>(out: &mut W, columns_by_header: &BTreeMap<String, Vec<String>>) -> Result<()> {
    write_table(out, columns_by_header, screen_columns())
}

fn write_line<W: Write>(out: &mut W, columns: usize) -> Result<()> {
    writeln!(out, "{}", "-".repeat(columns.saturating_sub(1)))?;
    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    columns_by_header: &BTreeMap<String, Vec<String>>,
    screen_columns: usize,
) -> Result<()> {
    if columns_by_header.is_empty() {
        return Ok(());
    }
    let field_width = (screen_columns / columns_by_header.len()).saturating_sub(1);

    // BTreeMap iteration is already sorted by header.
    let columns: Vec<Vec<String>> = columns_by_header
        .iter()
        .map(|(header, values)| {
            let mut values = values.clone();
            values.sort();
            let mut column = vec![header.clone(), "-".repeat(header.chars().count())];
            column.extend(values);
            column
        })
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..rows {
        for column in &columns {
            let cell = column.get(row).map(String::as_str).unwrap_or("");
            write!(out, "{:<width$} ", cell, width = field_width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
