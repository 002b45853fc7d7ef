//! The clipboard fix loop: poll, decide, rewrite, write back.

use std::sync::Arc;
use std::time::Duration;

use fixme_core::config::{defaults, AppSettings};
use fixme_core::errors::{ClipboardError, FixMeResult};
use fixme_core::models::RewriteOptions;
use fixme_core::traits::{IClipboard, ICodeDetector, IRewriter};
use fixme_detect::CodeDetector;
use fixme_observability::{events, rewrite_span, tick_span};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, Instrument};

use crate::monitor::{ClipboardMonitor, TickDecision};
use crate::settings::SettingsHandle;

/// Result of rewriting one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// The rewriter changed the text; the clipboard now holds this.
    Fixed(String),
    /// The rewriter returned the text as-is.
    Unchanged,
}

/// What a single poll ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Consumed,
    Filtered { app: String },
    SkippedCode,
    Fixed,
    Unchanged,
    /// The rewrite failed; the clipboard was left alone.
    Failed,
}

/// Polls a clipboard and fixes new prose through a rewriter.
///
/// Clipboard calls may block (they spawn processes), so they run on the
/// blocking thread pool.
pub struct ClipboardService<R, C, D = CodeDetector> {
    rewriter: R,
    clipboard: Arc<C>,
    detector: D,
    settings: SettingsHandle,
    monitor: ClipboardMonitor,
    poll_interval: Duration,
}

impl<R: IRewriter, C: IClipboard + 'static> ClipboardService<R, C> {
    pub fn new(rewriter: R, clipboard: C, settings: SettingsHandle) -> Self {
        Self {
            rewriter,
            clipboard: Arc::new(clipboard),
            detector: CodeDetector::new(),
            settings,
            monitor: ClipboardMonitor::new(),
            poll_interval: Duration::from_millis(defaults::DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl<R: IRewriter, C: IClipboard + 'static, D: ICodeDetector> ClipboardService<R, C, D> {
    /// Swap the code detector (e.g. one with configured weights).
    pub fn with_detector<D2: ICodeDetector>(self, detector: D2) -> ClipboardService<R, C, D2> {
        ClipboardService {
            rewriter: self.rewriter,
            clipboard: self.clipboard,
            detector,
            settings: self.settings,
            monitor: self.monitor,
            poll_interval: self.poll_interval,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn settings(&self) -> &SettingsHandle {
        &self.settings
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Mark whatever is on the clipboard right now as already seen.
    pub async fn prime(&mut self) -> FixMeResult<()> {
        let current = self.on_clipboard(|c| c.read()).await?;
        self.monitor.prime(current);
        Ok(())
    }

    /// Process the current clipboard on the next poll even if it has not changed.
    pub fn fix_now(&mut self) {
        self.monitor.force_next();
    }

    /// Poll the clipboard once.
    ///
    /// Rewrite failures are logged and reported as [`TickOutcome::Failed`].
    /// Clipboard errors and cancellation are returned to the caller.
    pub async fn poll_once(&mut self, cancel: &CancellationToken) -> FixMeResult<TickOutcome> {
        let settings = self.settings.snapshot();
        let filter_apps = settings.filter_apps_enabled;
        let (content, source_app) = self
            .on_clipboard(move |c| {
                let content = c.read()?;
                let source_app = if filter_apps { c.source_app() } else { None };
                Ok((content, source_app))
            })
            .await?;

        let decision = self
            .monitor
            .tick(content, source_app.as_deref(), &settings, &self.detector);

        let outcome = match decision {
            TickDecision::Idle => TickOutcome::Idle,
            TickDecision::Consumed => TickOutcome::Consumed,
            TickDecision::Filtered { app } => {
                events::app_filtered(&app);
                TickOutcome::Filtered { app }
            }
            TickDecision::SkippedCode(report) => {
                events::code_skipped(report.score, report.normalization, report.fenced);
                TickOutcome::SkippedCode
            }
            TickDecision::Process(text) => {
                events::clipboard_changed(text.chars().count(), source_app.as_deref());
                match self.fix_text(&text, &settings, cancel).await {
                    Ok(FixOutcome::Fixed(_)) => TickOutcome::Fixed,
                    Ok(FixOutcome::Unchanged) => TickOutcome::Unchanged,
                    Err(e) if e.is_cancelled() => return Err(e),
                    Err(e) => {
                        events::rewrite_failed(&e.to_string());
                        TickOutcome::Failed
                    }
                }
            }
        };
        Ok(outcome)
    }

    /// Rewrite `text` with options taken from `settings`. A changed result is
    /// written to the clipboard and remembered so the next poll ignores it.
    pub async fn fix_text(
        &mut self,
        text: &str,
        settings: &AppSettings,
        cancel: &CancellationToken,
    ) -> FixMeResult<FixOutcome> {
        let options = RewriteOptions::from(settings);
        let span = rewrite_span!(self.rewriter.name(), text.chars().count());
        let fixed = self
            .rewriter
            .rewrite(text, options, cancel)
            .instrument(span)
            .await?;

        if fixed == text {
            events::text_unchanged(text.chars().count());
            return Ok(FixOutcome::Unchanged);
        }

        let written = fixed.clone();
        self.on_clipboard(move |c| c.write(&written)).await?;
        self.monitor.record_own_write(fixed.clone());
        events::text_fixed(text.chars().count(), fixed.chars().count(), self.rewriter.name());
        Ok(FixOutcome::Fixed(fixed))
    }

    /// Run a clipboard operation on the blocking pool.
    async fn on_clipboard<T, F>(&self, op: F) -> FixMeResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&C) -> FixMeResult<T> + Send + 'static,
    {
        let clipboard = Arc::clone(&self.clipboard);
        tokio::task::spawn_blocking(move || op(&clipboard))
            .await
            .map_err(|e| ClipboardError::Unavailable {
                reason: e.to_string(),
            })?
    }

    /// Poll every `poll_interval` until `cancel` fires.
    pub async fn run(&mut self, cancel: CancellationToken) {
        let poll_ms = u64::try_from(self.poll_interval.as_millis()).unwrap_or(u64::MAX);
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        events::monitor_state(true, poll_ms);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {}
            }
            match self.poll_once(&cancel).instrument(tick_span!()).await {
                Ok(_) => {}
                Err(e) if e.is_cancelled() => break,
                Err(e) => error!(error = %e, "clipboard poll failed"),
            }
        }

        events::monitor_state(false, poll_ms);
    }
}
