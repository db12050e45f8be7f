/// Shared application state
use melodia_core::CatalogStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn CatalogStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn CatalogStorage>) -> Self {
        Self { storage }
    }
}
