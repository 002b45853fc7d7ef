//! Settings persistence and the shared settings handle.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use fixme_core::config::AppSettings;
use fixme_core::errors::{FixMeResult, SettingsError};
use fixme_core::traits::ISettingsStore;
use fixme_observability::events;

/// Settings stored as a TOML file. A missing file yields `defaults`.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    defaults: AppSettings,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_defaults(path, AppSettings::default())
    }

    /// Store whose missing file falls back to `defaults` (usually the
    /// `[settings]` section of the config file).
    pub fn with_defaults(path: impl Into<PathBuf>, defaults: AppSettings) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl ISettingsStore for TomlSettingsStore {
    fn load(&self) -> FixMeResult<AppSettings> {
        if !self.path.exists() {
            return Ok(self.defaults.clone());
        }
        let source = std::fs::read_to_string(&self.path).map_err(|e| SettingsError::ReadFailed {
            path: self.display_path(),
            reason: e.to_string(),
        })?;
        let settings = toml::from_str(&source).map_err(|e| SettingsError::Malformed {
            path: self.display_path(),
            reason: e.to_string(),
        })?;
        Ok(settings)
    }

    fn save(&self, settings: &AppSettings) -> FixMeResult<()> {
        let write_failed = |reason: String| SettingsError::WriteFailed {
            path: self.display_path(),
            reason,
        };
        let serialized =
            toml::to_string_pretty(settings).map_err(|e| write_failed(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }
        // Write then rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, serialized).map_err(|e| write_failed(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| write_failed(e.to_string()))?;
        Ok(())
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    saved: Mutex<Option<AppSettings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last saved settings, if any.
    pub fn saved(&self) -> Option<AppSettings> {
        self.saved
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ISettingsStore for MemorySettingsStore {
    fn load(&self) -> FixMeResult<AppSettings> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, settings: &AppSettings) -> FixMeResult<()> {
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(settings.clone());
        Ok(())
    }
}

/// A boolean setting that can be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    Enabled,
    TranslateToEnglish,
    SkipCode,
    PresentationMode,
    FilterApps,
}

impl SettingToggle {
    fn flag(self, settings: &mut AppSettings) -> &mut bool {
        match self {
            SettingToggle::Enabled => &mut settings.enabled,
            SettingToggle::TranslateToEnglish => &mut settings.translate_to_english,
            SettingToggle::SkipCode => &mut settings.skip_code,
            SettingToggle::PresentationMode => &mut settings.presentation_mode,
            SettingToggle::FilterApps => &mut settings.filter_apps_enabled,
        }
    }
}

/// Current settings shared between the monitor and whatever changes them.
/// Every change is saved through the store.
#[derive(Clone)]
pub struct SettingsHandle {
    current: Arc<RwLock<AppSettings>>,
    store: Arc<dyn ISettingsStore>,
}

impl SettingsHandle {
    /// Load the initial settings from `store`.
    pub fn load(store: Arc<dyn ISettingsStore>) -> FixMeResult<Self> {
        let initial = store.load()?;
        Ok(Self::new(initial, store))
    }

    pub fn new(initial: AppSettings, store: Arc<dyn ISettingsStore>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
            store,
        }
    }

    /// Copy of the current settings.
    pub fn snapshot(&self) -> AppSettings {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Apply `change`, save, and return the new settings. The in-memory
    /// value is only replaced once the save succeeds.
    pub fn update(&self, change: impl FnOnce(&mut AppSettings)) -> FixMeResult<AppSettings> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let mut next = guard.clone();
        change(&mut next);
        self.store.save(&next)?;
        *guard = next.clone();
        events::settings_saved(next.enabled, next.translate_to_english, next.skip_code);
        Ok(next)
    }

    /// Set one flag and save. Returns the new value.
    pub fn set(&self, toggle: SettingToggle, value: bool) -> FixMeResult<bool> {
        self.update(|s| *toggle.flag(s) = value)?;
        Ok(value)
    }

    /// Flip one flag and save. Returns the new value.
    pub fn toggle(&self, toggle: SettingToggle) -> FixMeResult<bool> {
        let mut next = self.update(|s| {
            let flag = toggle.flag(s);
            *flag = !*flag;
        })?;
        Ok(*toggle.flag(&mut next))
    }
}

impl std::fmt::Debug for SettingsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsHandle")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}
