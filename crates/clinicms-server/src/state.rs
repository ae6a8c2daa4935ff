//! Server state.

use clinicms_store::ContentStore;
use std::sync::Arc;

/// Shared state for all route handlers.
///
/// The store is the single injected instance every handler goes through;
/// there is no other process-wide content state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
}

impl AppState {
    /// Create state around a content store.
    pub fn new(store: ContentStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
