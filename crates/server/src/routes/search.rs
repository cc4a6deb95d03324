use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::state::ServerState;
use crate::telemetry::record_upstream;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Body of `POST /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub texts: Vec<String>,
}

/// Embed `texts` and return the nearest movies in one round trip.
pub async fn search_movies(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> ServerResult<Json<Vec<Value>>> {
    let start = Instant::now();
    let result = state.search.search(&request.texts).await;
    if !request.texts.is_empty() {
        record_upstream("search", start, result.is_ok());
    }
    Ok(Json(result?))
}
