//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields. Clipboard
//! text itself is never logged, only its length.

/// The clipboard changed and the new text will be processed.
pub fn clipboard_changed(chars: usize, source_app: Option<&str>) {
    tracing::debug!(
        event = "clipboard_changed",
        chars = chars,
        source_app = source_app.unwrap_or("unknown"),
        "clipboard changed"
    );
}

/// The text looked like code and was left alone.
pub fn code_skipped(score: u64, normalization: u64, fenced: bool) {
    tracing::info!(
        event = "code_skipped",
        score = score,
        normalization = normalization,
        fenced = fenced,
        "detected code, skipping grammar check"
    );
}

/// The change came from a filtered application.
pub fn app_filtered(app: &str) {
    tracing::info!(event = "app_filtered", app = %app, "clipboard change from filtered app");
}

/// The rewrite produced different text and the clipboard was replaced.
pub fn text_fixed(original_chars: usize, fixed_chars: usize, rewriter: &str) {
    tracing::info!(
        event = "text_fixed",
        original_chars = original_chars,
        fixed_chars = fixed_chars,
        rewriter = %rewriter,
        "clipboard text fixed"
    );
}

/// The rewrite returned the text unchanged.
pub fn text_unchanged(chars: usize) {
    tracing::info!(event = "text_unchanged", chars = chars, "no grammar issues found");
}

/// The rewrite failed; the clipboard keeps its contents.
pub fn rewrite_failed(error: &str) {
    tracing::error!(event = "rewrite_failed", error = %error, "error fixing grammar");
}

/// A settings toggle was persisted.
pub fn settings_saved(enabled: bool, translate_to_english: bool, skip_code: bool) {
    tracing::info!(
        event = "settings_saved",
        enabled = enabled,
        translate_to_english = translate_to_english,
        skip_code = skip_code,
        "settings saved"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// The monitor loop started or stopped.
pub fn monitor_state(running: bool, poll_interval_ms: u64) {
    tracing::info!(
        event = "monitor_state",
        running = running,
        poll_interval_ms = poll_interval_ms,
        "clipboard monitor {}",
        if running { "started" } else { "stopped" }
    );
}
