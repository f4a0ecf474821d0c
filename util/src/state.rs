//! Application state container shared across Axum route handlers.
//!
//! This struct holds the quiz store behind an `Arc` so it can be cloned into every handler via
//! Axum's `State<T>` extractor.

use crate::config;
use crate::store::{QuizStore, StoreError};
use std::sync::Arc;
use tracing::{info, warn};

/// Central application state shared across the server.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<QuizStore>,
}

impl AppState {
    /// Creates a new `AppState` around an existing store.
    pub fn new(store: QuizStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Builds the state from configuration.
    ///
    /// With `SEED_PATH` set the store is loaded from that document; otherwise it starts empty.
    pub async fn init() -> Result<Self, StoreError> {
        match config::seed_path() {
            Some(path) => {
                let store = QuizStore::from_seed_file(&path).await?;
                info!(seed = %path, "quiz store seeded");
                Ok(Self::new(store))
            }
            None => {
                warn!("SEED_PATH not set; starting with an empty quiz store");
                Ok(Self::default())
            }
        }
    }

    /// Returns a shared reference to the quiz store.
    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    /// Returns a cloned handle to the quiz store.
    ///
    /// Useful for spawned tasks that require ownership.
    pub fn store_clone(&self) -> Arc<QuizStore> {
        Arc::clone(&self.store)
    }
}
