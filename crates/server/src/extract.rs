use axum::extract::FromRequest;

use crate::error::ServerError;

/// `Json` extractor whose rejections become `400 { "error": ... }` instead of
/// axum's plain-text 415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
