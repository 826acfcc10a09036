//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the immutable record store.

use std::sync::Arc;

use crate::store::TrajectoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TrajectoryStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: TrajectoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
