//! # osgbuild Configuration Reading
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module reads INI-style configuration files for the build tooling and
//! offers accessors that fall back to defaults when a section or option is
//! missing, so callers never have to distinguish "absent" from "empty" unless
//! they want to.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Several files may be given; they are read in order and later files
//!   override options set by earlier ones.
//! - Files that cannot be read or parsed are skipped with a log message. Only
//!   when nothing at all could be loaded does `load` fail.
//! - Values are raw: no escape or quote processing (`rust-ini` with both
//!   disabled). Option names are case-insensitive, section names are not.
//! - Options in a `[DEFAULT]` section are visible from every other section.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use osgbuild::core::config::IniConfiguration;
//!
//! # fn run() -> osgbuild::core::error::Result<()> {
//! let cfg = IniConfiguration::load(&["/etc/osg-build.ini", "/home/me/.osg-build.ini"])?;
//! let koji_tag = cfg.get_or("koji", "tag", "osg-el9");
//! let arches = cfg.get_list("mock", "arches"); // "x86_64, aarch64" -> ["x86_64", "aarch64"]
//! # let _ = (koji_tag, arches);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{BuildError, Result};
use anyhow::{bail, Context};
use ini::{Ini, ParseOption};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Section whose options are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

type Section = BTreeMap<String, String>;

/// Merged contents of one or more INI files.
#[derive(Debug, Clone, Default)]
pub struct IniConfiguration {
    sections: BTreeMap<String, Section>,
    sources: Vec<PathBuf>,
}

impl IniConfiguration {
    /// Loads and merges `files` in order.
    ///
    /// # Errors
    ///
    /// - `BuildError::Config` if `files` is empty.
    /// - `BuildError::Config` ("No configuration could be loaded") if none of the
    ///   files yielded a single section.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        if files.is_empty() {
            bail!(BuildError::Config(
                "At least one inifile must be provided".to_string()
            ));
        }

        let mut config = IniConfiguration::default();
        for file in files {
            let path = file.as_ref();
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    debug!("Skipping configuration file {}: {}", path.display(), e);
                    continue;
                }
            };
            match parse_ini(&content) {
                Ok(ini) => {
                    info!("Loaded configuration from: {}", path.display());
                    config.merge(ini);
                    config.sources.push(path.to_path_buf());
                }
                Err(e) => warn!("Ignoring malformed configuration file {}: {:#}", path.display(), e),
            }
        }

        if config.sections.is_empty() {
            bail!(BuildError::Config(
                "No configuration could be loaded".to_string()
            ));
        }
        debug!("Final loaded configuration: {:?}", config.sections);
        Ok(config)
    }

    /// Builds a configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = IniConfiguration::default();
        config.merge(parse_ini(content)?);
        Ok(config)
    }

    fn merge(&mut self, ini: Ini) {
        for (section, properties) in ini.iter() {
            // Options before the first section header have nowhere to go.
            let Some(section) = section else {
                continue;
            };
            let entry = self.sections.entry(section.to_string()).or_default();
            for (option, value) in properties.iter() {
                entry.insert(option.to_lowercase(), value.to_string());
            }
        }
    }

    /// Raw value of `option` in `section`, falling back to `[DEFAULT]`.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        let option = option.to_lowercase();
        self.sections
            .get(section)
            .and_then(|s| s.get(&option))
            .or_else(|| {
                self.sections
                    .get(DEFAULT_SECTION)
                    .and_then(|s| s.get(&option))
            })
            .map(String::as_str)
    }

    /// Value of `option` in `section`, or `default` if the section or option is missing.
    pub fn get_or(&self, section: &str, option: &str, default: &str) -> String {
        self.get(section, option).unwrap_or(default).to_string()
    }

    /// `option` parsed as a comma/whitespace separated list. Missing -> empty list.
    pub fn get_list(&self, section: &str, option: &str) -> Vec<String> {
        parse_list_str(self.get(section, option).unwrap_or(""))
    }

    pub fn has_section(&self, section: &str) -> bool {
        section != DEFAULT_SECTION && self.sections.contains_key(section)
    }

    /// Names of all sections except `[DEFAULT]`, sorted.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections
            .keys()
            .map(String::as_str)
            .filter(|name| *name != DEFAULT_SECTION)
    }

    /// Files that were successfully loaded, in load order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}

fn parse_ini(content: &str) -> Result<Ini> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    Ini::load_from_str_opt(content, options).context("Failed to parse INI content")
}

/// Splits a string on commas and whitespace, dropping empty items.
pub fn parse_list_str(list: &str) -> Vec<String> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
