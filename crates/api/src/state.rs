use std::sync::Arc;

use dogs_core::service::DogService;
use dogs_core::store::DogStore;

/// The store behind every handler, chosen once at startup.
pub type SharedStore = Arc<dyn DogStore>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub dogs: Arc<DogService<SharedStore>>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            dogs: Arc::new(DogService::new(store)),
        }
    }

    pub fn store(&self) -> &SharedStore {
        self.dogs.store()
    }
}
