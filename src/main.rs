//! album-catalog server entry point.
//!
//! Starts the Axum HTTP server with the album REST endpoints.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use album_catalog::api;
use album_catalog::app_state::AppState;
use album_catalog::config::CatalogConfig;
use album_catalog::persistence::sqlite::SqliteAlbumStore;
use album_catalog::service::AlbumService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = CatalogConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting album-catalog");

    // Open the database and prepare the schema
    let store = SqliteAlbumStore::connect(&config).await?;

    // Build service layer
    let album_service = Arc::new(AlbumService::new(store));

    // Build application state
    let app_state = AppState { album_service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
