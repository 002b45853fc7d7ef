use super::{ClipboardError, ConfigError, RewriteError, SettingsError};

/// Workspace-wide error. Subsystem errors convert into it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum FixMeError {
    #[error(transparent)]
    RewriteError(#[from] RewriteError),

    #[error(transparent)]
    SettingsError(#[from] SettingsError),

    #[error(transparent)]
    ClipboardError(#[from] ClipboardError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("degraded mode: {component} using fallback {fallback}")]
    DegradedMode { component: String, fallback: String },
}

impl FixMeError {
    /// Whether this error came from the caller cancelling the operation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FixMeError::RewriteError(RewriteError::Cancelled))
    }
}

/// Convenience alias used throughout the workspace.
pub type FixMeResult<T> = Result<T, FixMeError>;
