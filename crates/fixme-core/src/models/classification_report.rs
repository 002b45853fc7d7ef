use serde::{Deserialize, Serialize};

/// Diagnostic breakdown of a code-likelihood decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Final verdict: `true` when the text looks like code.
    pub is_code: bool,
    /// Weighted composite score.
    pub score: u64,
    /// `max(1, chars / unit)`; the score must exceed it.
    pub normalization: u64,
    pub brace_count: u64,
    pub semicolon_count: u64,
    pub equals_count: u64,
    /// Accumulated keyword hits (exact and partial increments, before weighting).
    pub keyword_hits: u64,
    /// Accumulated syntax-token hits (before weighting).
    pub syntax_hits: u64,
    pub consistent_indentation: bool,
    /// The text contains a markdown code fence.
    pub fenced: bool,
}
