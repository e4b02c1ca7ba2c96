//! # Text Helpers
//!
//! File: cli/src/common/text.rs
//!
//! Small string utilities shared by the build commands: joining names for
//! messages, splitting Koji-style NVRs, and recognizing URLs.
//!
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

static NVR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+)-(?P<version>[^-]+)-(?P<release>[^-]+)$").expect("valid NVR regex")
});

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-a-z+]+://").expect("valid URL regex"));

pub use crate::common::process::decode_output as to_str;

/// Renders `items`, sorts the strings and joins them with ", ".
pub fn comma_join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut rendered: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    rendered.sort();
    rendered.join(", ")
}

/// Splits a build NVR (`name-version-release`) into its parts.
///
/// The name may itself contain dashes; version and release may not. Returns
/// three empty strings if `build` is not an NVR.
///
/// ```
/// use osgbuild::common::text::split_nvr;
///
/// let (n, v, r) = split_nvr("osg-ca-certs-1.120-1.osg24.el9");
/// assert_eq!((n.as_str(), v.as_str(), r.as_str()), ("osg-ca-certs", "1.120", "1.osg24.el9"));
/// ```
pub fn split_nvr(build: &str) -> (String, String, String) {
    match NVR.captures(build) {
        Some(caps) => (
            caps["name"].to_string(),
            caps["version"].to_string(),
            caps["release"].to_string(),
        ),
        None => Default::default(),
    }
}

/// True if `location` starts with a URL scheme such as `https://` or `git+ssh://`.
pub fn is_url(location: &str) -> bool {
    URL.is_match(location)
}
