//! shoot-tracker server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use shoot_tracker::api;
use shoot_tracker::app_state::AppState;
use shoot_tracker::config::{StorageBackend, TrackerConfig};
use shoot_tracker::persistence::{InMemoryStore, JsonFileStore, ShootStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = TrackerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, backend = ?config.storage_backend, "starting shoot-tracker");

    // Build persistence layer
    let store: Arc<dyn ShootStore> = match config.storage_backend {
        StorageBackend::File => {
            tracing::info!(path = %config.data_file.display(), "using JSON file store");
            Arc::new(JsonFileStore::new(config.data_file.clone()))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            Arc::new(InMemoryStore::new())
        }
    };

    // Build application state
    let app_state = AppState::new(store);

    // Build router
    let app = Router::new().merge(api::build_router());

    #[cfg(feature = "swagger-ui")]
    let app = {
        use shoot_tracker::api::openapi::ApiDoc;
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.request_timeout_secs),
            )),
    );
    let app = if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };
    let app = app.with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
