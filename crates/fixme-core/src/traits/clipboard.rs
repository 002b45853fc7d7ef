use crate::errors::FixMeResult;

/// Access to the system clipboard's plain-text contents.
pub trait IClipboard: Send + Sync {
    /// Current text contents, `None` when the clipboard holds no text.
    fn read(&self) -> FixMeResult<Option<String>>;

    /// Replace the clipboard contents.
    fn write(&self, text: &str) -> FixMeResult<()>;

    /// Identifier of the application that owns the latest clipboard change, if known.
    fn source_app(&self) -> Option<String> {
        None
    }
}
