use fixme_core::traits::ICodeDetector;
use fixme_detect::{classify, CodeDetector};
use proptest::prelude::*;

// ── Classification is a pure function ─────────────────────────────────────

proptest! {
    #[test]
    fn classification_is_deterministic(text in "\\PC{0,300}") {
        prop_assert_eq!(classify(&text), classify(&text));
        let detector = CodeDetector::new();
        prop_assert_eq!(detector.analyze(&text), detector.analyze(&text));
    }
}

// ── A code fence always wins ──────────────────────────────────────────────

proptest! {
    #[test]
    fn fence_forces_code_verdict(
        before in "[a-zA-Z ,.]{0,200}",
        after in "[a-zA-Z ,.]{0,200}"
    ) {
        let text = format!("{before}```{after}");
        prop_assert!(classify(&text));
    }
}

// ── Verdict agrees with the reported score ────────────────────────────────

proptest! {
    #[test]
    fn verdict_matches_score_and_fence(text in "\\PC{0,300}") {
        let report = CodeDetector::new().analyze(&text);
        prop_assert!(report.normalization >= 1);
        prop_assert_eq!(
            report.is_code,
            report.score > report.normalization || report.fenced
        );
    }

    #[test]
    fn plain_lowercase_words_without_keywords_are_prose(
        words in proptest::collection::vec("[mnpqu]{2,8}", 1..40)
    ) {
        // Letters m, n, p, q, u cannot spell any keyword; one line, no punctuation.
        let text = words.join(" ");
        prop_assert!(!classify(&text));
    }
}
