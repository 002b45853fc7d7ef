use serde::{Deserialize, Serialize};

use super::PlaceholderMap;

/// Output of a mask call: text with URL spans replaced, plus the mapping back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedText {
    pub text: String,
    pub placeholders: PlaceholderMap,
}

impl MaskedText {
    /// Text that needed no masking.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholders: PlaceholderMap::new(),
        }
    }

    /// Number of masked spans.
    pub fn masked_count(&self) -> usize {
        self.placeholders.len()
    }
}
