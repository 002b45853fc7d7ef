use serde::{Deserialize, Serialize};

use super::defaults;

/// User-facing toggles. Loaded at startup, saved whenever one changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Master switch for clipboard processing.
    pub enabled: bool,
    /// Ask the rewriter to translate non-English text to English.
    pub translate_to_english: bool,
    /// Leave clipboard contents alone when they look like source code.
    pub skip_code: bool,
    /// Rephrase corrected text for spoken presentation.
    pub presentation_mode: bool,
    /// Ignore clipboard changes that come from `filtered_apps`.
    pub filter_apps_enabled: bool,
    /// Application identifiers (bundle ids or process names) to ignore.
    pub filtered_apps: Vec<String>,
}

impl AppSettings {
    /// Whether a clipboard change originating from `app` should be ignored.
    pub fn is_app_filtered(&self, app: Option<&str>) -> bool {
        if !self.filter_apps_enabled {
            return false;
        }
        match app {
            Some(app) => self
                .filtered_apps
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(app)),
            None => false,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ENABLED,
            translate_to_english: defaults::DEFAULT_TRANSLATE_TO_ENGLISH,
            skip_code: defaults::DEFAULT_SKIP_CODE,
            presentation_mode: defaults::DEFAULT_PRESENTATION_MODE,
            filter_apps_enabled: defaults::DEFAULT_FILTER_APPS_ENABLED,
            filtered_apps: Vec::new(),
        }
    }
}
