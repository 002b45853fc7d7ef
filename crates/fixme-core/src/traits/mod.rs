mod clipboard;
mod detector;
mod masker;
mod rewriter;
mod settings_store;

pub use clipboard::IClipboard;
pub use detector::ICodeDetector;
pub use masker::IMasker;
pub use rewriter::IRewriter;
pub use settings_store::ISettingsStore;
