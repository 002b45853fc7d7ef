use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Clipboard monitor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Interval between clipboard polls (milliseconds).
    pub poll_interval_ms: u64,
    /// Where toggled settings are persisted. `None` keeps them in memory.
    pub settings_path: Option<PathBuf>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: defaults::DEFAULT_POLL_INTERVAL_MS,
            settings_path: None,
        }
    }
}
