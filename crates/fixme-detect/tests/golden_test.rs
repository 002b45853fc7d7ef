//! Golden dataset tests for fixme-detect.
//!
//! Every labelled sample under `golden/classification` must receive its
//! expected verdict with the default weights.

use fixme_core::traits::ICodeDetector;
use fixme_detect::CodeDetector;
use test_fixtures::classification_fixtures;

#[test]
fn golden_classification_samples() {
    let detector = CodeDetector::new();
    let fixtures = classification_fixtures();
    assert!(!fixtures.is_empty(), "no classification fixtures found");

    for fixture in &fixtures {
        for sample in &fixture.samples {
            let report = detector.analyze(&sample.text);
            assert_eq!(
                report.is_code, sample.expected_code,
                "Sample '{}' ({}): expected code={}, report: {:?}",
                sample.id, fixture.description, sample.expected_code, report
            );
        }
    }
}

#[test]
fn golden_fenced_samples_are_flagged() {
    let detector = CodeDetector::new();
    for fixture in classification_fixtures() {
        for sample in fixture.samples.iter().filter(|s| s.text.contains("```")) {
            assert!(
                detector.analyze(&sample.text).fenced,
                "Sample '{}' contains a fence but was not flagged",
                sample.id
            );
        }
    }
}
