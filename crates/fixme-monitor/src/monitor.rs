//! Clipboard change detection. Pure state machine; the caller does the I/O.

use fixme_core::config::AppSettings;
use fixme_core::models::ClassificationReport;
use fixme_core::traits::ICodeDetector;

/// What to do with the clipboard contents seen on one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickDecision {
    /// Disabled, no text, blank text, or nothing changed.
    Idle,
    /// A change we were told to ignore (typically our own write).
    Consumed,
    /// The change came from a filtered application.
    Filtered { app: String },
    /// The text looks like code.
    SkippedCode(ClassificationReport),
    /// New prose to fix.
    Process(String),
}

/// Remembers the last clipboard text so each change is handled once.
#[derive(Debug, Default)]
pub struct ClipboardMonitor {
    previous: Option<String>,
    skip_next_change: bool,
    force_next: bool,
}

impl ClipboardMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `content` as already seen, so only later changes are processed.
    pub fn prime(&mut self, content: Option<String>) {
        self.previous = content;
    }

    /// Ignore the next change regardless of its content.
    pub fn ignore_next_change(&mut self) {
        self.skip_next_change = true;
    }

    /// Process the next poll even if the clipboard is unchanged.
    pub fn force_next(&mut self) {
        self.force_next = true;
    }

    /// Remember text we wrote ourselves so it is not processed again.
    pub fn record_own_write(&mut self, text: String) {
        self.previous = Some(text);
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Decide what to do with the current clipboard `content`.
    pub fn tick<D: ICodeDetector + ?Sized>(
        &mut self,
        content: Option<String>,
        source_app: Option<&str>,
        settings: &AppSettings,
        detector: &D,
    ) -> TickDecision {
        if !settings.enabled {
            return TickDecision::Idle;
        }
        let Some(content) = content else {
            return TickDecision::Idle;
        };

        if self.skip_next_change {
            self.skip_next_change = false;
            self.previous = Some(content);
            return TickDecision::Consumed;
        }

        let forced = std::mem::take(&mut self.force_next);
        if !forced && self.previous.as_deref() == Some(content.as_str()) {
            return TickDecision::Idle;
        }
        self.previous = Some(content.clone());

        if content.trim().is_empty() {
            return TickDecision::Idle;
        }

        if settings.is_app_filtered(source_app) {
            return TickDecision::Filtered {
                app: source_app.unwrap_or_default().to_string(),
            };
        }

        if settings.skip_code {
            let report = detector.analyze(&content);
            if report.is_code {
                return TickDecision::SkippedCode(report);
            }
        }

        TickDecision::Process(content)
    }
}
