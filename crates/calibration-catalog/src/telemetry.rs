//! Tracing initialization

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for tracing initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Log level filter, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_format: false,
        }
    }
}

impl TracingConfig {
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }
}

/// Install a global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed, which leaves the
/// existing one in place.
pub fn init_tracing(config: &TracingConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_format {
        subscriber
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        subscriber.with(fmt::layer().with_target(true)).try_init()
    };
    installed.is_ok()
}
