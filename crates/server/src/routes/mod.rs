//! API route handlers
//!
//! Routes are organized by upstream:
//!
//! - `embed`: query embeddings (`/api/embed`)
//! - `datastax`: vector-store searches (`/api/datastrax/...`)
//! - `search`: embed-then-search in one call (`/api/search`)
//! - `tmdb`: movie metadata passthrough (`/api/tmdb/...`)
//! - `health`: liveness, readiness and metrics

pub mod datastax;
pub mod embed;
pub mod health;
pub mod search;
pub mod tmdb;

use crate::error::ServerError;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "reelgate",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /api/embed",
            "POST /api/datastrax/db/movie",
            "POST /api/datastrax/library",
            "POST /api/search",
            "GET /api/tmdb/{path}",
            "GET /health",
            "GET /ready",
            "GET /metrics"
        ]
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// 405 handler for known paths hit with the wrong method
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
