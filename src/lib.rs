use config::Config;
use std::sync::Arc;
use storage::Store;

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;
pub mod storage;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}
