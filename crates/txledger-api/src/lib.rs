//! HTTP API server for the transaction ledger
//!
//! Routes are organized into modules:
//! - routes::transactions: Transaction create, list, update, delete
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use txledger_config::Config;
use txledger_core::{StoreSummary, TransactionStore};

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TransactionStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<TransactionStore>, config: Config) -> Self {
        Self { store, config }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{
        api_transaction_create, api_transaction_delete, api_transaction_detail,
        api_transaction_update, api_transactions,
    };
    use routes::settings::api_settings;

    let cors_enable = state.config.server.cors_enable;

    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/settings", get(api_settings))
        .route("/transactions", get(api_transactions).post(api_transaction_create))
        .route(
            "/transactions/:id",
            get(api_transaction_detail)
                .put(api_transaction_update)
                .delete(api_transaction_delete),
        )
        .with_state(state);

    if cors_enable {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get store summary (JSON API)
async fn api_summary(State(state): State<AppState>) -> Result<Json<StoreSummary>, ApiError> {
    Ok(Json(state.store.summary()?))
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `store` - The shared transaction store
pub async fn start_server(config: Config, store: Arc<TransactionStore>) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(store, config);

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting txledger server on http://{}", listener.local_addr()?);
    log::info!("Available routes:");
    log::info!("  - GET/POST /transactions");
    log::info!("  - GET/PUT/DELETE /transactions/:id");
    log::info!("  - GET /api/health, /api/summary, /api/settings");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, serve until the process is killed
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
