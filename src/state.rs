use std::sync::Arc;

use crate::config::{Config, StorageMode};
use crate::storage::{DatabaseStorage, MemoryStorage, Storage};

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let storage: Arc<dyn Storage> = match config.storage_mode {
            StorageMode::Memory => Arc::new(MemoryStorage::seeded()),
            StorageMode::Database => Arc::new(
                DatabaseStorage::connect(&config.database_url)
                    .await
                    .expect("Database misconfigured!"),
            ),
        };

        Arc::new(Self { config, storage })
    }

    /// State over an arbitrary backend, for tests.
    pub fn with_storage(storage: Arc<dyn Storage>) -> Arc<Self> {
        Arc::new(Self {
            config: Config {
                port: 0,
                storage_mode: StorageMode::Memory,
                database_url: String::new(),
            },
            storage,
        })
    }
}
