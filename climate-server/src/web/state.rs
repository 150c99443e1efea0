//! Application state for the web layer.

use std::sync::Arc;

use crate::store::ClimateStore;

/// Shared application state.
///
/// Immutable once built; the store's pool hands each request its own
/// connection.
#[derive(Clone)]
pub struct AppState {
    /// Measurement store
    pub store: Arc<ClimateStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: ClimateStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
