use serde::{Deserialize, Serialize};

use crate::config::AppSettings;

/// Per-request instructions for the rewrite service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOptions {
    pub translate_to_english: bool,
    pub presentation_mode: bool,
}

impl From<&AppSettings> for RewriteOptions {
    fn from(settings: &AppSettings) -> Self {
        Self {
            translate_to_english: settings.translate_to_english,
            presentation_mode: settings.presentation_mode,
        }
    }
}
