//! Server types and shared state.

use std::sync::Arc;

use crate::traits::PersonStore;

/// Shared application state for all handlers.
///
/// Holds the storage accessor behind a trait object so handlers can be
/// exercised against a mock.
#[derive(Clone)]
pub struct AppState {
    /// Storage accessor for person records.
    pub store: Arc<dyn PersonStore>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(store: impl PersonStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
