/// Clipboard access errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("clipboard write failed: {reason}")]
    WriteFailed { reason: String },
}
