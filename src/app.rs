use std::sync::Arc;

use anyhow::Context;

use crate::{
    config::AppConfig,
    logging,
    session::SessionStore,
    storage::{FileStorage, MemoryStorage, StorageClient},
};

/// Composition root: configuration, storage and the session store wired together.
pub struct App {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn StorageClient>,
    pub sessions: SessionStore,
}

impl App {
    /// Reads `.env` and the environment, installs logging and restores any stored session.
    pub fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        logging::init_tracing();

        let config = AppConfig::from_env().context("failed to load configuration")?;
        let storage = FileStorage::new(&config.storage.data_dir).with_context(|| {
            format!(
                "failed to open storage directory {}",
                config.storage.data_dir.display()
            )
        })?;
        tracing::info!(data_dir = %config.storage.data_dir.display(), "storage ready");

        Ok(Self::from_parts(Arc::new(config), Arc::new(storage)))
    }

    pub fn from_parts(config: Arc<AppConfig>, storage: Arc<dyn StorageClient>) -> Self {
        let sessions = SessionStore::init(storage.clone(), &config);
        Self {
            config,
            storage,
            sessions,
        }
    }

    /// In-memory app with no auth latency.
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::in_memory()),
            Arc::new(MemoryStorage::new()),
        )
    }

    pub fn shutdown(self) {
        self.sessions.dispose();
        tracing::info!("app shut down");
    }
}
