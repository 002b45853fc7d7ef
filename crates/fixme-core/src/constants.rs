/// FixMe system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Opening delimiter of a URL placeholder token.
pub const PLACEHOLDER_OPEN: &str = "⟦";

/// Closing delimiter of a URL placeholder token.
pub const PLACEHOLDER_CLOSE: &str = "⟧";

/// Label between the delimiters and the sequence number: `⟦URL_<n>⟧`.
pub const PLACEHOLDER_LABEL: &str = "URL_";

/// Markdown code fence. Its presence forces a "code" verdict.
pub const CODE_FENCE: &str = "```";

/// Environment variable consulted for the rewrite API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FIXME_LOG";

/// Build the placeholder token for the `n`-th masked URL (1-based).
pub fn placeholder_token(n: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{PLACEHOLDER_LABEL}{n}{PLACEHOLDER_CLOSE}")
}
