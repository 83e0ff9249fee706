//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::AlbumService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Every collaborator is handed over at construction; handlers never
/// reach out to a global registry for their dependencies.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Album service for all business logic.
    pub album_service: Arc<AlbumService>,
}
