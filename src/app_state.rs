//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::ShootStore;
use crate::service::ShootService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shoot service for all business logic.
    pub shoot_service: Arc<ShootService>,
}

impl AppState {
    /// Builds the state around the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ShootStore>) -> Self {
        Self {
            shoot_service: Arc::new(ShootService::new(store)),
        }
    }
}
