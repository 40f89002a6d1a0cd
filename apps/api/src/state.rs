use std::sync::Arc;

use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative profile store, optionally fronted by the Redis cache.
    pub store: Arc<dyn ProfileStore>,
}
