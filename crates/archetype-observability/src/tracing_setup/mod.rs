//! Tracing setup — structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use archetype_core::config::ObservabilityConfig;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "ARCHETYPE_LOG";

/// Install the global subscriber.
///
/// `ARCHETYPE_LOG` takes precedence over `config.log_level`. Returns false if
/// a global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs {
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

