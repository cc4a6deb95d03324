//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (tracing, request ID, logging, CORS, timeout, body limit)
//! - Graceful shutdown handling

use crate::config::GatewayConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, method_not_allowed, not_found};
use crate::routes::{datastax, embed, health, search, tmdb};
use crate::state::ServerState;
use crate::telemetry::{init_tracing, install_metrics_recorder};
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware.
///
/// Middleware runs top to bottom on the way in:
/// 1. Tracing spans
/// 2. Request ID tracking
/// 3. Request logging and metrics
/// 4. CORS
/// 5. Timeout handling
/// 6. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let api_routes = Router::new()
        .route("/api/embed", post(embed::embed_texts))
        .route("/api/datastrax/db/movie", post(datastax::query_movies))
        .route("/api/datastrax/library", post(datastax::query_library))
        .route("/api/search", post(search::search_movies))
        .route("/api/tmdb/{*path}", get(tmdb::tmdb_passthrough));

    let public_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(request_id))
                .layer(from_fn(log_requests))
                .layer(cors)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    state.config.timeout(),
                ))
                .layer(DefaultBodyLimit::max(state.config.max_body_size())),
        )
        .with_state(state)
}

/// Start the reelgate HTTP server
///
/// Initializes logging and metrics, builds the upstream clients from `config`,
/// and serves until SIGTERM or Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use server::GatewayConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = GatewayConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: GatewayConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level);

    let mut state = ServerState::new(config.clone())?;
    if config.metrics_enabled {
        state = state.with_metrics(install_metrics_recorder()?);
    }
    if config.embedding.api_key.is_none() {
        tracing::warn!("No embedding API key configured; /api/embed will fail upstream");
    }

    let app = build_router(Arc::new(state));
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting reelgate on {}", addr);
    tracing::info!(
        "Embedding model: {}, collections: {} / {}, limit: {}",
        config.embedding.model_name,
        config.vector_store.movie_collection,
        config.vector_store.library_collection,
        config.vector_store.default_limit
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}MB, CORS: {}, Metrics: {}",
        config.timeout_secs,
        config.max_body_size_mb,
        config.enable_cors,
        config.metrics_enabled
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
