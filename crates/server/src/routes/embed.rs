use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::state::ServerState;
use crate::telemetry::record_upstream;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// Body of `POST /api/embed`
#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
    /// Query strings, each one semantic unit. Must be non-empty.
    pub texts: Vec<String>,
}

/// Embed one or more texts into a single (averaged) vector.
pub async fn embed_texts(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<EmbedRequest>,
) -> ServerResult<Json<Vec<f32>>> {
    let start = Instant::now();
    let result = state.generator.generate(&request.texts).await;
    if !request.texts.is_empty() {
        record_upstream("embedding", start, result.is_ok());
    }
    Ok(Json(result?))
}
