use fixme_core::constants::placeholder_token;
use fixme_core::models::{MaskedText, PlaceholderMap};
use fixme_core::traits::IMasker;

use crate::degradation::DegradationTracker;
use crate::patterns::{placeholder, url};

/// Mask URLs in `text` with the default masker.
///
/// `unmask(mask(t))` restores `t` unless `t` already contains text shaped
/// like a placeholder (`⟦URL_<n>⟧`). Such literals are not escaped, so
/// unmask replaces them with the URL that was assigned the same number.
pub fn mask(text: &str) -> MaskedText {
    UrlMasker::new().mask(text)
}

/// Restore URLs recorded in `placeholders` with the default masker.
pub fn unmask(text: &str, placeholders: &PlaceholderMap) -> String {
    UrlMasker::new().unmask(text, placeholders)
}

/// URL masker. Holds no state between calls: every mask call numbers its
/// placeholders from 1 and the mapping lives only in the returned value.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlMasker;

impl UrlMasker {
    pub fn new() -> Self {
        Self
    }

    /// Mask with degradation tracking, so callers can tell "no URLs" from
    /// "detector unavailable".
    pub fn mask_with_tracking(&self, text: &str) -> (MaskedText, DegradationTracker) {
        let mut tracker = DegradationTracker::new();
        if !url::is_available() {
            tracker.record_failure(url::PATTERN_NAME, "no spans detected");
            return (MaskedText::unchanged(text), tracker);
        }

        let spans = url::find_spans(text);
        if spans.is_empty() {
            return (MaskedText::unchanged(text), tracker);
        }

        let mut masked = String::with_capacity(text.len());
        let mut placeholders = PlaceholderMap::new();
        let mut cursor = 0;
        for (index, span) in spans.iter().enumerate() {
            let token = placeholder_token(index + 1);
            masked.push_str(&text[cursor..span.start]);
            masked.push_str(&token);
            placeholders.push(token, span.as_str(text));
            cursor = span.end;
        }
        masked.push_str(&text[cursor..]);

        (
            MaskedText {
                text: masked,
                placeholders,
            },
            tracker,
        )
    }

    /// Unmask with degradation tracking.
    pub fn unmask_with_tracking(
        &self,
        text: &str,
        placeholders: &PlaceholderMap,
    ) -> (String, DegradationTracker) {
        let mut tracker = DegradationTracker::new();
        if placeholders.is_empty() {
            return (text.to_string(), tracker);
        }

        let Some(re) = placeholder::RE_PLACEHOLDER.as_ref() else {
            tracker.record_failure(placeholder::PATTERN_NAME, "substring replacement");
            return (replace_each(text, placeholders), tracker);
        };

        // One left-to-right pass: restored URLs are never rescanned, and
        // tokens the map doesn't know are left as they are.
        let restored = re.replace_all(text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            placeholders.get(token).unwrap_or(token).to_string()
        });
        (restored.into_owned(), tracker)
    }
}

impl IMasker for UrlMasker {
    fn mask(&self, text: &str) -> MaskedText {
        self.mask_with_tracking(text).0
    }

    fn unmask(&self, text: &str, placeholders: &PlaceholderMap) -> String {
        self.unmask_with_tracking(text, placeholders).0
    }
}

fn replace_each(text: &str, placeholders: &PlaceholderMap) -> String {
    placeholders
        .iter()
        .fold(text.to_string(), |acc, p| acc.replace(&p.token, &p.original))
}
