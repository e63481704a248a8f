//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

/// Default HTTP port when `SERVER_PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration parameters.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    /// Shared secret expected in the `X-ERU-ApiKey` header.
    /// `None` rejects all `/api/**` traffic.
    pub api_key: Option<String>,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_KEY` - Shared API secret (unset or blank means "not configured")
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("API_KEY").ok().and_then(non_blank),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Builds a config with the given API key and the default port.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: non_blank(api_key.into()),
            server_port: DEFAULT_PORT,
        }
    }

    /// Whether a usable API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            server_port: DEFAULT_PORT,
        }
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("server_port", &self.server_port)
            .finish()
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
