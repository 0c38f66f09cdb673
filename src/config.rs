//! Server configuration. Read from `WALLET_API_*` variables, then overridden
//! by CLI flags.

use std::path::PathBuf;
use thiserror::Error;

use crate::store::{MemoryStore, StoreResult};

pub const ENV_APP: &str = "WALLET_API_APP";
pub const ENV_HOST: &str = "WALLET_API_HOST";
pub const ENV_PORT: &str = "WALLET_API_PORT";
pub const ENV_DATA: &str = "WALLET_API_DATA";
pub const ENV_LOG_JSON: &str = "WALLET_API_LOG_JSON";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }

    pub fn from_flag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub app: String,
    pub host: String,
    pub port: u16,
    /// Dataset file. `None` serves an empty store.
    pub data_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { app: "wallet-api".into(), host: "0.0.0.0".into(), port: 8080, data_path: None, log_format: LogFormat::Pretty }
    }
}

impl ServerConfig {
    pub fn new(app: impl Into<String>) -> Self { Self { app: app.into(), ..Default::default() } }

    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();
        if let Some(app) = get(ENV_APP) { config.app = app; }
        if let Some(host) = get(ENV_HOST) { config.host = host; }
        if let Some(port) = get(ENV_PORT) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort { var: ENV_PORT, value: port.clone() })?;
        }
        config.data_path = get(ENV_DATA).map(PathBuf::from);
        config.log_format = get(ENV_LOG_JSON).map(|v| LogFormat::from_flag(&v)).unwrap_or_default();
        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self { self.host = host.into(); self }
    pub fn with_port(mut self, port: u16) -> Self { self.port = port; self }
    pub fn with_data(mut self, path: impl Into<PathBuf>) -> Self { self.data_path = Some(path.into()); self }
    pub fn with_log_format(mut self, format: LogFormat) -> Self { self.log_format = format; self }

    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }

    /// Load the configured dataset, or an empty store when none is set.
    pub fn open_store(&self) -> StoreResult<MemoryStore> {
        match &self.data_path {
            Some(path) => MemoryStore::load(path),
            None => Ok(MemoryStore::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_APP, "wallets-prod"),
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, " 3000 "),
            (ENV_DATA, "/srv/data.json"),
            (ENV_LOG_JSON, "1"),
        ]))
        .unwrap();
        assert_eq!(config.app, "wallets-prod");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/data.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(ENV_PORT, ""), (ENV_DATA, "  ")])).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_PORT, "eighty")])).unwrap_err();
        assert!(err.to_string().contains("eighty"));
        assert!(ServerConfig::from_lookup(lookup(&[(ENV_PORT, "70000")])).is_err());
    }

    #[test]
    fn no_dataset_means_empty_store() {
        let store = ServerConfig::default().open_store().unwrap();
        assert_eq!(store.wallet_count(), 0);
    }
}
