//! Placeholder token recognition for unmasking.

use regex::Regex;
use std::sync::LazyLock;

pub const PATTERN_NAME: &str = "url_placeholder";

/// `⟦URL_<n>⟧`.
pub static RE_PLACEHOLDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"⟦URL_\d+⟧").ok());

pub fn is_available() -> bool {
    RE_PLACEHOLDER.is_some()
}
