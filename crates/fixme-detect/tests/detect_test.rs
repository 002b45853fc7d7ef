use fixme_core::config::DetectionConfig;
use fixme_core::traits::ICodeDetector;
use fixme_detect::{classify, CodeDetector};

// ── Reference scenarios ───────────────────────────────────────────────────

#[test]
fn javascript_function_is_code() {
    assert!(classify("function foo() { return x; }"));
}

#[test]
fn short_greeting_is_prose() {
    assert!(!classify("Hello, how are you today?"));
}

#[test]
fn empty_text_is_prose() {
    let report = CodeDetector::new().analyze("");
    assert!(!report.is_code);
    assert_eq!(report.score, 0);
    assert_eq!(report.normalization, 1);
}

#[test]
fn code_fence_forces_code_verdict() {
    let text = "Here is what I said in the meeting yesterday, nothing more:\n\
                ```\nwe should all go home early on friday afternoon\n```\n\
                Thanks a lot, and have a nice weekend, everyone.";
    let report = CodeDetector::new().analyze(text);
    assert!(report.fenced);
    assert!(report.score <= report.normalization, "score alone should not decide");
    assert!(report.is_code);
}

// ── Score components ──────────────────────────────────────────────────────

#[test]
fn report_breaks_down_the_reference_snippet() {
    let report = CodeDetector::new().analyze("function foo() { return x; }");
    assert_eq!(report.brace_count, 4);
    assert_eq!(report.semicolon_count, 1);
    assert_eq!(report.equals_count, 0);
    // "function" and "return" are exact hits worth 2 each.
    assert_eq!(report.keyword_hits, 4);
    assert_eq!(report.syntax_hits, 0);
    assert!(!report.consistent_indentation);
    assert_eq!(report.score, 4 + 2 + 4);
    assert_eq!(report.normalization, 1);
}

#[test]
fn exact_keyword_match_ignores_case_and_punctuation() {
    let report = CodeDetector::new().analyze("Return,");
    assert_eq!(report.keyword_hits, 2);
}

#[test]
fn substring_keyword_match_scores_once_per_word() {
    // "lifetime" contains "if"; a word scores at most one partial hit.
    let report = CodeDetector::new().analyze("lifetime");
    assert_eq!(report.keyword_hits, 1);
}

#[test]
fn syntax_tokens_count_once_per_token_per_word() {
    // "a!==b" contains "!==" and "!=" → two distinct tokens.
    let report = CodeDetector::new().analyze("a!==b");
    assert_eq!(report.syntax_hits, 2);
    // Repeating a token inside the same word does not add more hits.
    let report = CodeDetector::new().analyze("a->b->c");
    assert_eq!(report.syntax_hits, 1);
}

#[test]
fn indentation_bonus_needs_three_lines_at_one_depth() {
    let text = "alpha\nbeta\ngamma";
    let report = CodeDetector::new().analyze(text);
    assert!(report.consistent_indentation);
    assert_eq!(report.score, 3);
    assert!(report.is_code);
}

#[test]
fn long_prose_is_normalized_away() {
    let text = "I think we should meet on Tuesday to talk about the plan. The team \
                has a lot of good ideas and I would like to hear all of them before \
                we decide anything at all.";
    let report = CodeDetector::new().analyze(text);
    assert!(report.score > 0);
    assert!(!report.is_code, "report: {report:?}");
}

#[test]
fn rust_snippet_is_code() {
    let text = "fn main() {\n    let x = 5;\n    let y = x + 1;\n    println!(\"{}\", y);\n}";
    assert!(classify(text));
}

#[test]
fn python_snippet_is_code() {
    let text = "def add(a, b):\n    total = a + b\n    return total\n";
    assert!(classify(text));
}

// ── Weights ───────────────────────────────────────────────────────────────

#[test]
fn alternate_weighting_is_configurable() {
    let weights = DetectionConfig {
        keyword_weight: 2,
        syntax_weight: 3,
        ..DetectionConfig::default()
    };
    let detector = CodeDetector::with_weights(weights);
    let report = detector.analyze("x -> y");
    assert_eq!(report.syntax_hits, 1);
    assert_eq!(report.score, 3);
    assert_eq!(detector.weights().syntax_weight, 3);
}

#[test]
fn zero_normalization_unit_does_not_panic() {
    let weights = DetectionConfig {
        chars_per_normalization_unit: 0,
        ..DetectionConfig::default()
    };
    let report = CodeDetector::with_weights(weights).analyze("abc");
    assert_eq!(report.normalization, 3);
}

#[test]
fn detector_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CodeDetector>();
}

#[test]
fn fullwidth_and_arabic_punctuation_do_not_hide_exact_keywords() {
    let detector = CodeDetector::new();
    assert_eq!(detector.analyze("int，").keyword_hits, 2);
    assert_eq!(detector.analyze("return？").keyword_hits, 2);
    assert_eq!(detector.analyze("class،").keyword_hits, 2);
}

/// Records the names of spans created while it is the default subscriber.
#[derive(Default)]
struct SpanNames(std::sync::Mutex<Vec<&'static str>>);

impl tracing::Subscriber for SpanNames {
    fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
        true
    }
    fn new_span(&self, attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        let mut names = self.0.lock().unwrap();
        names.push(attrs.metadata().name());
        tracing::span::Id::from_u64(names.len() as u64)
    }
    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
    fn event(&self, _: &tracing::Event<'_>) {}
    fn enter(&self, _: &tracing::span::Id) {}
    fn exit(&self, _: &tracing::span::Id) {}
}

#[test]
fn analysis_runs_inside_a_classify_span() {
    let subscriber = std::sync::Arc::new(SpanNames::default());
    tracing::subscriber::with_default(subscriber.clone(), || {
        CodeDetector::new().analyze("let x = 1;");
    });
    assert_eq!(*subscriber.0.lock().unwrap(), vec!["fixme.classify"]);
}
