//! # fixme-core
//!
//! Foundation crate for the FixMe clipboard grammar fixer.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AppSettings, FixMeConfig};
pub use errors::{FixMeError, FixMeResult};
pub use models::{ClassificationReport, MaskedText, PlaceholderMap, RewriteOptions};
