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

/// Body of `POST /api/datastrax/db/movie`
#[derive(Debug, Deserialize)]
pub struct MovieQueryRequest {
    /// Query vector, usually the output of `/api/embed`.
    pub vector: Vec<f32>,
}

/// Body of `POST /api/datastrax/library`
#[derive(Debug, Deserialize)]
pub struct LibraryQueryRequest {
    /// Free text; the store vectorizes it.
    pub expression: String,
}

/// Nearest movies to a precomputed vector.
pub async fn query_movies(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<MovieQueryRequest>,
) -> ServerResult<Json<Vec<Value>>> {
    let store = &state.config.vector_store;
    let start = Instant::now();
    let result = state
        .executor
        .query_by_vector(&store.movie_collection, request.vector, store.default_limit)
        .await;
    record_upstream("vector_store", start, result.is_ok());
    Ok(Json(result?))
}

/// Nearest library records to a text expression, vectorized store-side.
pub async fn query_library(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<LibraryQueryRequest>,
) -> ServerResult<Json<Vec<Value>>> {
    let store = &state.config.vector_store;
    let start = Instant::now();
    let result = state
        .executor
        .query_by_text(&store.library_collection, request.expression, store.default_limit)
        .await;
    record_upstream("vector_store", start, result.is_ok());
    Ok(Json(result?))
}
