use crate::models::{MaskedText, PlaceholderMap};

/// Protects spans of text from a downstream rewrite.
pub trait IMasker: Send + Sync {
    /// Replace protected spans with placeholder tokens.
    fn mask(&self, text: &str) -> MaskedText;

    /// Restore the originals recorded in `placeholders`.
    fn unmask(&self, text: &str, placeholders: &PlaceholderMap) -> String;
}
