//! Server configuration read from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// JSON file of players to load at startup
    pub seed_path: Option<PathBuf>,
    /// `*` or a comma separated origin list; CORS is off when unset
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let server_host = non_empty("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let server_port = match non_empty("SERVER_PORT").or_else(|| non_empty("PORT")) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid server port, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            server_host,
            server_port,
            seed_path: non_empty("PLAYERS_SEED_PATH").map(PathBuf::from),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server_host, self.server_port).parse()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
