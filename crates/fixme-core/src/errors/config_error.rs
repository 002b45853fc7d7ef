/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("config parse error: {reason}")]
    Parse { reason: String },

    #[error("config serialize error: {reason}")]
    Serialize { reason: String },
}
