use std::sync::Arc;

use infra::{DynStore, MemoryStore, PgStore};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(store: DynStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// State over a Postgres pool.
    pub fn postgres(db: infra::db::Db, config: Config) -> Self {
        Self::new(Arc::new(PgStore::new(db)), config)
    }

    /// State over a fresh in-process store seeded with the member types.
    pub fn in_memory(config: Config) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
