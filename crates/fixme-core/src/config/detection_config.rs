use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the code-likelihood score.
///
/// The score is a weighted sum of lexical signals; the verdict compares it
/// against `max(1, chars / chars_per_normalization_unit)`. These are heuristic
/// constants and are expected to be retuned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Per `{ } ( ) [ ]`.
    pub brace_weight: u32,
    /// Per `;`.
    pub semicolon_weight: u32,
    /// Per `=`.
    pub equals_weight: u32,
    /// Multiplier applied to the accumulated keyword hits.
    pub keyword_weight: u32,
    /// Multiplier applied to the accumulated syntax-token hits.
    pub syntax_weight: u32,
    /// Added once when indentation is consistent.
    pub indentation_bonus: u32,
    /// Keyword hits for a word that equals a keyword.
    pub exact_keyword_hit: u32,
    /// Keyword hits for a word that merely contains a keyword.
    pub partial_keyword_hit: u32,
    /// Characters per unit of the length normalization factor.
    pub chars_per_normalization_unit: usize,
    /// A leading-space bucket needs at least this many lines to count as consistent.
    pub min_lines_for_consistent_indent: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            brace_weight: defaults::DEFAULT_BRACE_WEIGHT,
            semicolon_weight: defaults::DEFAULT_SEMICOLON_WEIGHT,
            equals_weight: defaults::DEFAULT_EQUALS_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            syntax_weight: defaults::DEFAULT_SYNTAX_WEIGHT,
            indentation_bonus: defaults::DEFAULT_INDENTATION_BONUS,
            exact_keyword_hit: defaults::DEFAULT_EXACT_KEYWORD_HIT,
            partial_keyword_hit: defaults::DEFAULT_PARTIAL_KEYWORD_HIT,
            chars_per_normalization_unit: defaults::DEFAULT_CHARS_PER_NORMALIZATION_UNIT,
            min_lines_for_consistent_indent: defaults::DEFAULT_MIN_LINES_FOR_CONSISTENT_INDENT,
        }
    }
}
