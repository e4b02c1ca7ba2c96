//! # Distribution Version Detection
//!
//! File: cli/src/common/system/distro.rs
//!
//! ## Overview
//!
//! Derives a short distro version tag ("dver") from os-release metadata:
//!
//! - `ID_LIKE` mentions `rhel` (RHEL, Alma, Rocky, CentOS Stream): `el<major>`.
//! - `ID` is `fedora`: `fc<major>`.
//! - Anything else, or no `VERSION_ID`: the empty string.
//!
//! Lookup failures are never errors here; callers treat "" as "unknown".
//!
use crate::common::fs::io::slurp;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Location of the os-release file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Parses os-release `KEY=value` lines. Surrounding double quotes are removed
/// from values; lines without `=` are ignored.
pub fn parse_os_release(text: &str) -> HashMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.trim_matches('"').to_string()))
        .collect()
}

/// The dver for parsed os-release contents, or "" if it can't be told.
pub fn dver_from_os_release(os_release: &HashMap<String, String>) -> String {
    let version_id = os_release.get("VERSION_ID").map(String::as_str).unwrap_or("");
    if version_id.is_empty() {
        return String::new();
    }
    let major = version_id.split('.').next().unwrap_or(version_id);

    if os_release.get("ID_LIKE").is_some_and(|like| like.contains("rhel")) {
        format!("el{}", major)
    } else if os_release.get("ID").is_some_and(|id| id == "fedora") {
        format!("fc{}", major)
    } else {
        String::new()
    }
}

/// The dver of the os-release file at `path`, or "" on any failure.
pub fn dver_from_file(path: &Path) -> String {
    match slurp(path) {
        Ok(contents) => dver_from_os_release(&parse_os_release(&contents)),
        Err(e) => {
            debug!("Unable to read {:?}: {:#}", path, e);
            String::new()
        }
    }
}

/// The dver of this machine (e.g. `el9`), or "".
pub fn local_machine_dver() -> String {
    dver_from_file(Path::new(OS_RELEASE_PATH))
}

/// The major release of this machine (e.g. 9), or 0.
pub fn local_machine_release() -> u32 {
    release_number(&local_machine_dver())
}

/// The first number in `dver`, or 0.
pub fn release_number(dver: &str) -> u32 {
    FIRST_NUMBER
        .find(dver)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
