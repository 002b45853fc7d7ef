use std::sync::LazyLock;

use fixme_core::config::DetectionConfig;
use fixme_core::constants::CODE_FENCE;
use fixme_core::models::ClassificationReport;
use fixme_core::traits::ICodeDetector;
use fixme_observability::classify_span;
use tracing::debug;

use crate::signals::{has_consistent_indentation, trim_punctuation};
use crate::vocabulary::{contains_keyword, is_keyword, syntax_tokens_in};

static DEFAULT_DETECTOR: LazyLock<CodeDetector> = LazyLock::new(CodeDetector::new);

/// Classify `text` with the default weights. `true` means "likely code".
pub fn classify(text: &str) -> bool {
    DEFAULT_DETECTOR.is_code(text)
}

/// Weighted-heuristic code detector.
///
/// Implements `ICodeDetector` from fixme-core. Stateless apart from its
/// weights, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CodeDetector {
    weights: DetectionConfig,
}

impl CodeDetector {
    /// Detector with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector with custom weights.
    pub fn with_weights(weights: DetectionConfig) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &DetectionConfig {
        &self.weights
    }

    fn score_words(&self, text: &str, report: &mut ClassificationReport) {
        let w = &self.weights;
        for word in text.split_whitespace() {
            let trimmed = trim_punctuation(word);
            if !trimmed.is_empty() {
                let lowered = trimmed.to_lowercase();
                if is_keyword(&lowered) {
                    report.keyword_hits += u64::from(w.exact_keyword_hit);
                } else if contains_keyword(&lowered) {
                    report.keyword_hits += u64::from(w.partial_keyword_hit);
                }
            }
            report.syntax_hits += syntax_tokens_in(word) as u64;
        }
    }

    fn score_chars(text: &str, report: &mut ClassificationReport) {
        for c in text.chars() {
            match c {
                '{' | '}' | '(' | ')' | '[' | ']' => report.brace_count += 1,
                ';' => report.semicolon_count += 1,
                '=' => report.equals_count += 1,
                _ => {}
            }
        }
    }
}

impl ICodeDetector for CodeDetector {
    fn analyze(&self, text: &str) -> ClassificationReport {
        let chars = text.chars().count();
        let _span = classify_span!(chars).entered();
        let w = &self.weights;
        let mut report = ClassificationReport::default();

        self.score_words(text, &mut report);
        Self::score_chars(text, &mut report);
        report.consistent_indentation =
            has_consistent_indentation(text, w.min_lines_for_consistent_indent);
        report.fenced = text.contains(CODE_FENCE);

        report.score = report.brace_count * u64::from(w.brace_weight)
            + report.semicolon_count * u64::from(w.semicolon_weight)
            + report.equals_count * u64::from(w.equals_weight)
            + report.keyword_hits * u64::from(w.keyword_weight)
            + report.syntax_hits * u64::from(w.syntax_weight)
            + if report.consistent_indentation {
                u64::from(w.indentation_bonus)
            } else {
                0
            };

        let unit = w.chars_per_normalization_unit.max(1);
        report.normalization = ((chars / unit) as u64).max(1);
        report.is_code = report.score > report.normalization || report.fenced;

        if report.is_code {
            debug!(
                score = report.score,
                normalization = report.normalization,
                braces = report.brace_count,
                semicolons = report.semicolon_count,
                equals = report.equals_count,
                keywords = report.keyword_hits,
                syntax = report.syntax_hits,
                fenced = report.fenced,
                "text classified as code"
            );
        }

        report
    }
}
