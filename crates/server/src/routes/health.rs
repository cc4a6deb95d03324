use crate::state::ServerState;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint (liveness)
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "reelgate",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// Readiness check endpoint: reports which upstreams are configured.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let configured = |present: bool| if present { "configured" } else { "missing_credentials" };
    let cfg = &state.config;

    Json(json!({
        "status": "ready",
        "service": "reelgate",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
        "components": {
            "embedding": configured(cfg.embedding.api_key.is_some()),
            "vector_store": configured(cfg.vector_store.token.is_some()),
            "tmdb": configured(cfg.tmdb.api_key.is_some()),
        },
        "embedding_model": state.generator.model_name(),
    }))
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let body = state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default();
    ([(CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
