mod clipboard_error;
mod config_error;
mod fixme_error;
mod rewrite_error;
mod settings_error;

pub use clipboard_error::ClipboardError;
pub use config_error::ConfigError;
pub use fixme_error::{FixMeError, FixMeResult};
pub use rewrite_error::RewriteError;
pub use settings_error::SettingsError;
