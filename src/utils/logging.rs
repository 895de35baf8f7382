//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber from a [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level when set.

use crate::config::LoggingConfig;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<bool> = OnceCell::new();

/// Initialize the global subscriber.
///
/// Returns `true` if this call installed it. Later calls, or calls made after
/// another subscriber was installed elsewhere, return `false`.
pub fn init_logging(config: &LoggingConfig) -> bool {
    *INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string().to_lowercase()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        let installed = if config.json_format {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };

        if installed {
            tracing::info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
        }
        installed
    })
}

/// Whether [`init_logging`] has run
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}
