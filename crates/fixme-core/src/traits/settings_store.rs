use crate::config::AppSettings;
use crate::errors::FixMeResult;

/// Persistence for user settings.
pub trait ISettingsStore: Send + Sync {
    /// Load settings. A store with nothing saved yields the defaults.
    fn load(&self) -> FixMeResult<AppSettings>;

    /// Persist settings.
    fn save(&self, settings: &AppSettings) -> FixMeResult<()>;
}
