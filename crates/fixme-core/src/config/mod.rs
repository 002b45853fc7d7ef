pub mod defaults;
pub mod detection_config;
pub mod monitor_config;
pub mod observability_config;
pub mod rewrite_config;
pub mod settings_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use detection_config::DetectionConfig;
pub use monitor_config::MonitorConfig;
pub use observability_config::ObservabilityConfig;
pub use rewrite_config::RewriteConfig;
pub use settings_config::AppSettings;

use crate::errors::{ConfigError, FixMeResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixMeConfig {
    pub settings: AppSettings,
    pub detection: DetectionConfig,
    pub rewrite: RewriteConfig,
    pub monitor: MonitorConfig,
    pub observability: ObservabilityConfig,
}

impl FixMeConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> FixMeResult<Self> {
        toml::from_str(source).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FixMeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> FixMeResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::Serialize {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
