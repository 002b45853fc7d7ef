use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fixme_core::config::AppSettings;
use fixme_core::errors::{FixMeResult, RewriteError};
use fixme_core::models::RewriteOptions;
use fixme_core::traits::{IClipboard, IRewriter};
use fixme_monitor::{
    ClipboardService, FixOutcome, MemoryClipboard, MemorySettingsStore, SettingsHandle,
    TickOutcome,
};
use tokio_util::sync::CancellationToken;

const TYPO: &str = "I has a question about teh meeting tomorrow.";
const FIXED: &str = "I have a question about the meeting tomorrow.";
const CODE: &str = "fn main() { let x = 1; }";

/// Fixes two known typos and remembers every call. Clones share the record.
#[derive(Clone, Default)]
struct FakeRewriter {
    calls: Arc<AtomicUsize>,
    options: Arc<Mutex<Vec<RewriteOptions>>>,
}

impl IRewriter for FakeRewriter {
    async fn rewrite(
        &self,
        text: &str,
        options: RewriteOptions,
        _cancel: &CancellationToken,
    ) -> FixMeResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.options.lock().unwrap().push(options);
        Ok(text.replace("I has", "I have").replace("teh", "the"))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

struct BrokenRewriter;

impl IRewriter for BrokenRewriter {
    async fn rewrite(
        &self,
        _text: &str,
        _options: RewriteOptions,
        _cancel: &CancellationToken,
    ) -> FixMeResult<String> {
        Err(RewriteError::Http {
            status: 401,
            body: "unauthorized".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "broken"
    }
}

/// Waits for cancellation, like a slow network call would.
struct HangingRewriter;

impl IRewriter for HangingRewriter {
    async fn rewrite(
        &self,
        _text: &str,
        _options: RewriteOptions,
        cancel: &CancellationToken,
    ) -> FixMeResult<String> {
        cancel.cancelled().await;
        Err(RewriteError::Cancelled.into())
    }

    fn name(&self) -> &str {
        "hanging"
    }
}

fn settings(initial: AppSettings) -> SettingsHandle {
    SettingsHandle::new(initial, Arc::new(MemorySettingsStore::new()))
}

fn service(clipboard: MemoryClipboard) -> (FakeRewriter, ClipboardService<FakeRewriter, MemoryClipboard>) {
    let rewriter = FakeRewriter::default();
    let service = ClipboardService::new(rewriter.clone(), clipboard, settings(AppSettings::default()));
    (rewriter, service)
}

#[tokio::test]
async fn fixes_new_clipboard_text() {
    let (rewriter, mut service) = service(MemoryClipboard::new());
    service.prime().await.unwrap();
    let cancel = CancellationToken::new();

    service.clipboard().set_contents(TYPO);
    assert_eq!(service.poll_once(&cancel).await.unwrap(), TickOutcome::Fixed);
    assert_eq!(service.clipboard().contents().as_deref(), Some(FIXED));
    assert_eq!(service.clipboard().writes(), vec![FIXED.to_string()]);

    // Our own write is not sent back through the rewriter.
    assert_eq!(service.poll_once(&cancel).await.unwrap(), TickOutcome::Idle);
    assert_eq!(rewriter.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn text_present_at_startup_is_left_alone() {
    let (rewriter, mut service) = service(MemoryClipboard::with_contents(TYPO));
    service.prime().await.unwrap();

    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    assert_eq!(outcome, TickOutcome::Idle);
    assert_eq!(rewriter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fix_now_processes_current_text() {
    let (_, mut service) = service(MemoryClipboard::with_contents(TYPO));
    service.prime().await.unwrap();
    service.fix_now();

    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    assert_eq!(outcome, TickOutcome::Fixed);
    assert_eq!(service.clipboard().contents().as_deref(), Some(FIXED));
}

#[tokio::test]
async fn correct_text_is_not_written_back() {
    let (rewriter, mut service) = service(MemoryClipboard::new());
    service.clipboard().set_contents(FIXED);

    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    assert_eq!(outcome, TickOutcome::Unchanged);
    assert!(service.clipboard().writes().is_empty());
    assert_eq!(rewriter.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn code_is_skipped_without_calling_the_rewriter() {
    let (rewriter, mut service) = service(MemoryClipboard::new());
    service.clipboard().set_contents(CODE);

    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    assert_eq!(outcome, TickOutcome::SkippedCode);
    assert_eq!(rewriter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn filtered_app_is_skipped() {
    let clipboard = MemoryClipboard::new();
    clipboard.set_source_app(Some("com.apple.Terminal"));
    let rewriter = FakeRewriter::default();
    let handle = settings(AppSettings {
        filter_apps_enabled: true,
        filtered_apps: vec!["com.apple.Terminal".to_string()],
        ..AppSettings::default()
    });
    let mut service = ClipboardService::new(rewriter.clone(), clipboard, handle);
    service.clipboard().set_contents(TYPO);

    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    assert_eq!(
        outcome,
        TickOutcome::Filtered {
            app: "com.apple.Terminal".to_string()
        }
    );
    assert_eq!(rewriter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn settings_changes_apply_on_next_poll() {
    let (rewriter, mut service) = service(MemoryClipboard::new());
    let cancel = CancellationToken::new();

    service
        .settings()
        .update(|s| {
            s.translate_to_english = false;
            s.presentation_mode = true;
        })
        .unwrap();
    service.clipboard().set_contents(TYPO);
    service.poll_once(&cancel).await.unwrap();

    let options = rewriter.options.lock().unwrap().clone();
    assert_eq!(
        options,
        vec![RewriteOptions {
            translate_to_english: false,
            presentation_mode: true,
        }]
    );

    service.settings().update(|s| s.enabled = false).unwrap();
    service.clipboard().set_contents("Another typo heer.");
    assert_eq!(service.poll_once(&cancel).await.unwrap(), TickOutcome::Idle);
}

#[tokio::test]
async fn rewrite_failure_leaves_clipboard_alone() {
    let clipboard = MemoryClipboard::new();
    let mut service = ClipboardService::new(BrokenRewriter, clipboard, settings(AppSettings::default()));
    service.clipboard().set_contents(TYPO);

    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    assert_eq!(outcome, TickOutcome::Failed);
    assert_eq!(service.clipboard().contents().as_deref(), Some(TYPO));
    assert!(service.clipboard().writes().is_empty());
}

#[tokio::test]
async fn fix_text_reports_outcome() {
    let (_, mut service) = service(MemoryClipboard::new());
    let cancel = CancellationToken::new();
    let settings = AppSettings::default();

    let fixed = service.fix_text(TYPO, &settings, &cancel).await.unwrap();
    assert_eq!(fixed, FixOutcome::Fixed(FIXED.to_string()));
    let unchanged = service.fix_text(FIXED, &settings, &cancel).await.unwrap();
    assert_eq!(unchanged, FixOutcome::Unchanged);
}

#[tokio::test(start_paused = true)]
async fn run_polls_until_cancelled() {
    let (rewriter, service) = service(MemoryClipboard::new());
    let mut service = service.with_poll_interval(Duration::from_millis(100));
    service.clipboard().set_contents(TYPO);
    let cancel = CancellationToken::new();

    let stopper = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(350)).await;
        stopper.cancel();
    });
    service.run(cancel).await;

    assert_eq!(rewriter.calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.clipboard().read().unwrap().as_deref(), Some(FIXED));
}

#[tokio::test]
async fn run_stops_when_an_in_flight_rewrite_is_cancelled() {
    let clipboard = MemoryClipboard::with_contents(TYPO);
    let mut service = ClipboardService::new(HangingRewriter, clipboard, settings(AppSettings::default()))
        .with_poll_interval(Duration::from_millis(10));
    let cancel = CancellationToken::new();

    let stopper = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        stopper.cancel();
    });
    tokio::time::timeout(Duration::from_secs(5), service.run(cancel))
        .await
        .expect("run should return after cancellation");
    assert!(service.clipboard().writes().is_empty());
}

/// A clipboard whose reads block the calling thread, like a slow `pbpaste`.
struct SlowClipboard(MemoryClipboard);

impl IClipboard for SlowClipboard {
    fn read(&self) -> FixMeResult<Option<String>> {
        std::thread::sleep(Duration::from_millis(200));
        self.0.read()
    }

    fn write(&self, text: &str) -> FixMeResult<()> {
        self.0.write(text)
    }
}

#[tokio::test]
async fn blocking_clipboard_reads_do_not_stall_the_runtime() {
    let progressed = Arc::new(AtomicUsize::new(0));
    let counter = progressed.clone();
    let ticker = tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(5)).await;
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    let clipboard = SlowClipboard(MemoryClipboard::new());
    let mut service = ClipboardService::new(FakeRewriter::default(), clipboard, settings(AppSettings::default()));
    let outcome = service.poll_once(&CancellationToken::new()).await.unwrap();
    ticker.abort();

    assert_eq!(outcome, TickOutcome::Idle);
    assert!(progressed.load(Ordering::SeqCst) > 0);
}
