//! Tracing setup: subscriber installation, span definitions and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use sentinela_core::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "SENTINELA_LOG";

/// Install the global subscriber.
///
/// Reads `SENTINELA_LOG` (e.g. `sentinela_runtime=debug,info`) and falls back
/// to `config.level` when it is unset or invalid. Safe to call repeatedly;
/// only the first call has an effect, and an already-installed subscriber
/// from the host application is left alone.
pub fn init_tracing(config: &LoggingConfig) {
    let level = config.level.clone();
    let json = config.json;
    INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

        let json_layer = json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_current_span(true)
        });
        let text_layer = (!json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .try_init();
    });
}
