//! Tracing setup: subscriber install, span definitions and event types.

pub mod events;
pub mod spans;

use fixme_core::config::ObservabilityConfig;
use fixme_core::constants::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects the `FIXME_LOG` environment variable for filtering and falls
/// back to `config.log_level`. Returns `false` if a subscriber was already set.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> bool {
    install(EnvFilter::new(filter), json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}
