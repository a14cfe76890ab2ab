use crate::config::Config;
use crate::store::MemoryStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: MemoryStore::new(),
            config: Arc::new(config),
        }
    }
}
