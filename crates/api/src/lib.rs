//! # Slotbook API
//!
//! The API crate provides the web server for the Slotbook scheduling service.
//! It exposes RESTful endpoints to list, create, book and delete fixed-length
//! appointment slots, and to query open 30-minute availability windows.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into store operations
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Slots live in a
//! [`SlotStore`] owned by the shared [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the slot store
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use slotbook_store::SlotStore;
use tokio::{net::TcpListener, sync::RwLock};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// The store sits behind a single lock: reads share it, while each
/// mutating operation holds the write guard from its first check to its
/// last write.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use slotbook_api::ApiState;
/// use slotbook_store::SlotStore;
///
/// let state = Arc::new(ApiState::new(SlotStore::seeded()));
/// let app = slotbook_api::router(state);
/// ```
pub struct ApiState {
    /// The in-memory slot collection
    pub store: RwLock<SlotStore>,
}

impl ApiState {
    pub fn new(store: SlotStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot endpoints
        .merge(routes::slots::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and slot store
///
/// This function sets up logging, configures routes and middleware, and
/// serves HTTP until Ctrl-C is received.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use slotbook_api::{config::ApiConfig, start_server};
/// use slotbook_store::SlotStore;
///
/// let config = ApiConfig::from_env()?;
/// start_server(config, SlotStore::seeded()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: SlotStore) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(slots = store.len(), "Slot store ready");
    let state = Arc::new(ApiState::new(store));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Request tracing and timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
