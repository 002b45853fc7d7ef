use crate::models::ClassificationReport;

/// Code-versus-prose classification.
pub trait ICodeDetector: Send + Sync {
    /// Full diagnostic breakdown.
    fn analyze(&self, text: &str) -> ClassificationReport;

    /// `true` when the text is likely source code.
    fn is_code(&self, text: &str) -> bool {
        self.analyze(text).is_code
    }
}
