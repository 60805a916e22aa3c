use std::{path::PathBuf, time::Duration};

use anyhow::Context;

pub const DEFAULT_STORAGE_KEY: &str = "nutritrack-user";

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub session_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    /// Simulated round trip applied to register and login.
    pub auth_latency: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("NUTRITRACK_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let session_key =
            std::env::var("NUTRITRACK_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.into());
        let latency_ms = match std::env::var("NUTRITRACK_AUTH_LATENCY_MS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("NUTRITRACK_AUTH_LATENCY_MS is not a number: {v}"))?,
            Err(_) => 1000,
        };
        Ok(Self {
            storage: StorageConfig {
                data_dir: PathBuf::from(data_dir),
                session_key,
            },
            auth_latency: Duration::from_millis(latency_ms),
        })
    }

    /// Zero-latency config for tests and embedding.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::from("."),
                session_key: DEFAULT_STORAGE_KEY.into(),
            },
            auth_latency: Duration::ZERO,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn in_memory_config_has_no_latency() {
        let cfg = AppConfig::in_memory();
        assert_eq!(cfg.auth_latency, Duration::ZERO);
        assert_eq!(cfg.storage.session_key, "nutritrack-user");
    }
}
