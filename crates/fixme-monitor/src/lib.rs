//! # fixme-monitor
//!
//! Watches the clipboard, decides what to do with each new text (ignore it,
//! skip it as code, skip it because of the source app, or fix it), runs the
//! rewrite, and writes the corrected text back. Settings are an explicit
//! handle backed by an injected store.

pub mod clipboard;
pub mod monitor;
pub mod service;
pub mod settings;

pub use clipboard::{CommandClipboard, MemoryClipboard, ShellCommand};
pub use monitor::{ClipboardMonitor, TickDecision};
pub use service::{ClipboardService, FixOutcome, TickOutcome};
pub use settings::{MemorySettingsStore, SettingToggle, SettingsHandle, TomlSettingsStore};
