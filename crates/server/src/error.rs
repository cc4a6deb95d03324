use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reelgate::SearchError;
use semantic::SemanticError;
use serde::{Deserialize, Serialize};
use vector::VectorError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Every failure a handler can produce. Converted into `{ "error": "<message>" }`
/// with the matching status code at the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Vector(#[from] VectorError),

    /// The upstream could not be reached or answered with garbage.
    #[error("{0}")]
    Upstream(String),

    /// The upstream answered with a non-success status.
    #[error("{message}")]
    UpstreamStatus { status: StatusCode, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ServerError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Semantic(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::Vector(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::UpstreamStatus { status, .. } if status.is_client_error() => *status,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Semantic(_)
            | ServerError::Vector(_)
            | ServerError::Upstream(_)
            | ServerError::UpstreamStatus { .. }
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<SearchError> for ServerError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Semantic(e) => ServerError::Semantic(e),
            SearchError::Vector(e) => ServerError::Vector(e),
        }
    }
}

/// Bodies over the size limit keep their 413; every other JSON rejection is a 400.
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(rejection.body_text())
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    }
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServerError::Upstream(format!("upstream request timed out: {err}"))
        } else {
            ServerError::Upstream(format!("upstream request failed: {err}"))
        }
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}
