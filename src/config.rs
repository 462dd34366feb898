use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Remote record store configuration
    pub store: StoreConfig,
}

/// Configuration for the remote record store backing all collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the record store API (e.g. "http://127.0.0.1:8090")
    pub base_url: String,
    /// API key sent as a bearer token, if the store requires one
    pub api_key: Option<String>,
    /// Per-request timeout in seconds (capped at 30)
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9100".to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8090".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("LIBRARY_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("RECORD_STORE_BASE_URL") {
            config.store.base_url = url;
        }
        if let Ok(key) = std::env::var("RECORD_STORE_API_KEY") {
            config.store.api_key = Some(key);
        }
        if let Ok(val) = std::env::var("RECORD_STORE_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.store.timeout_secs = v.min(30); // Cap at 30s
            }
        }

        config
    }
}
