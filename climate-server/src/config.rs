//! Server configuration read from the environment.

use std::net::SocketAddr;

use crate::store::StoreConfig;

/// Environment variable holding the store connection string.
pub const DATABASE_URL_VAR: &str = "CLIMATE_DATABASE_URL";

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "CLIMATE_BIND_ADDR";

/// Environment variable holding the pool size.
pub const MAX_CONNECTIONS_VAR: &str = "CLIMATE_MAX_CONNECTIONS";

const DEFAULT_DATABASE_URL: &str = "sqlite:Resources/hawaii.sqlite";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Measurement store settings
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError {
            var: BIND_ADDR_VAR,
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let mut store = StoreConfig::new(database_url);
        if let Some(raw) = lookup(MAX_CONNECTIONS_VAR) {
            let n = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError {
                        var: MAX_CONNECTIONS_VAR,
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError {
                        var: MAX_CONNECTIONS_VAR,
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            };
            store = store.with_max_connections(n);
        }

        Ok(Self { bind_addr, store })
    }
}
