//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::{RouteQueryEngine, TrainRegistry};
use crate::repository::TrainRepository;

/// Repository shared between request handlers.
pub type SharedRepository = Arc<dyn TrainRepository + Send + Sync>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Train store
    pub repository: SharedRepository,
}

impl AppState {
    /// Create a new app state around a repository.
    pub fn new(repository: impl TrainRepository + Send + Sync + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Query engine over the shared store.
    pub fn engine(&self) -> RouteQueryEngine<&(dyn TrainRepository + Send + Sync)> {
        RouteQueryEngine::new(self.repository.as_ref())
    }

    /// Registry writing to the shared store.
    pub fn registry(&self) -> TrainRegistry<&(dyn TrainRepository + Send + Sync)> {
        TrainRegistry::new(self.repository.as_ref())
    }
}
