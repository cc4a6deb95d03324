use crate::error::ServerResult;
use crate::state::ServerState;
use crate::telemetry::record_upstream;
use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// `GET /api/tmdb/{*path}`: forward to the movie metadata API with the key attached.
pub async fn tmdb_passthrough(
    State(state): State<Arc<ServerState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> ServerResult<Json<Value>> {
    let start = Instant::now();
    let result = state.tmdb.get(&path, query.as_deref()).await;
    record_upstream("tmdb", start, result.is_ok());
    Ok(Json(result?))
}
