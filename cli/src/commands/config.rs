//! # Config Command (`osgbuild config`)
//!
//! File: cli/src/commands/config.rs
//!
//! Reads one option from a stack of INI files, later files overriding earlier
//! ones, with `[DEFAULT]` fallback.
//!
//! ```bash
//! osgbuild config /etc/osg-build.ini ~/.osg-build.ini --get koji.targets --list
//! ```
//!
use anyhow::Context;
use clap::Parser;
use osgbuild::core::config::{parse_list_str, IniConfiguration};
use osgbuild::core::error::{BuildError, Result};
use std::path::PathBuf;

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// INI files, lowest priority first.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// The option to read, as SECTION.OPTION.
    #[arg(long, value_name = "SECTION.OPTION")]
    get: String,
    /// Treat the value as a comma/whitespace separated list; print one item per line.
    #[arg(long)]
    list: bool,
    /// Value to print when the option is missing.
    #[arg(long, value_name = "VALUE")]
    default: Option<String>,
}

/// Handler for `osgbuild config`.
pub fn handle_config(args: ConfigArgs) -> Result<i32> {
    let (section, option) = split_key(&args.get)?;
    let config = IniConfiguration::load(&args.files)?;

    let value = match (config.get(section, option), &args.default) {
        (Some(value), _) => value.to_string(),
        (None, Some(default)) => default.clone(),
        (None, None) => {
            return Err(BuildError::Config(format!(
                "No option '{}' in section '{}'",
                option, section
            ))
            .into())
        }
    };

    if args.list {
        for item in parse_list_str(&value) {
            println!("{}", item);
        }
    } else {
        println!("{}", value);
    }
    Ok(0)
}

/// Splits `SECTION.OPTION` at the last dot; section names may contain dots.
fn split_key(key: &str) -> Result<(&str, &str)> {
    key.rsplit_once('.')
        .filter(|(section, option)| !section.is_empty() && !option.is_empty())
        .with_context(|| format!("Expected SECTION.OPTION, got {:?}", key))
}
