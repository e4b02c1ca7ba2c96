//! # Locale Forcing and Output Decoding
//!
//! File: cli/src/common/process/locale.rs
//!
//! Captured command output is meant to be parsed by scripts, so the capturing
//! executors force the C locale on the child and turn whatever bytes come back
//! into a `String` without ever failing.
//!
use std::collections::HashMap;
use std::ffi::OsString;

/// Variables forced on captured commands so their output is unlocalized.
pub const C_LOCALE_VARS: [(&str, &str); 2] = [("LC_ALL", "C"), ("LANG", "C")];

/// Returns `base` (or the current process environment when `base` is `None`)
/// with `LC_ALL` and `LANG` set to `C`. Every other variable is kept.
pub fn c_locale_env(base: Option<&HashMap<String, String>>) -> HashMap<OsString, OsString> {
    let mut env: HashMap<OsString, OsString> = match base {
        Some(vars) => vars.iter().map(|(k, v)| (k.into(), v.into())).collect(),
        None => std::env::vars_os().collect(),
    };
    for (key, value) in C_LOCALE_VARS {
        env.insert(key.into(), value.into());
    }
    env
}

/// Decodes captured bytes into text.
///
/// Valid UTF-8 is kept as is. Every byte that is not part of a valid sequence
/// is written as a visible `\xNN` escape, so decoding never fails and no byte
/// is silently dropped.
pub fn decode_output(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        for byte in chunk.invalid() {
            text.push_str(&format!("\\x{:02x}", byte));
        }
    }
    text
}
