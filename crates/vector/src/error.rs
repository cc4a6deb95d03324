use thiserror::Error;

/// Errors surfaced by vector-store queries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VectorError {
    /// Empty vector, zero limit or blank collection name.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The store failed (connectivity, malformed filter, rejected token).
    #[error("{0}")]
    Provider(String),
    /// The store client could not be built from its configuration.
    #[error("invalid vector store config: {0}")]
    InvalidConfig(String),
}

impl VectorError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, VectorError::InvalidInput(_))
    }
}

impl From<reqwest::Error> for VectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            VectorError::Provider(format!("vector store request timed out: {err}"))
        } else {
            VectorError::Provider(format!("vector store request failed: {err}"))
        }
    }
}
