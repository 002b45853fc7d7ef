/// Settings persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to write settings to {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("settings file {path} is malformed: {reason}")]
    Malformed { path: String, reason: String },
}
