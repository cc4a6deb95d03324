use thiserror::Error;

/// Errors surfaced by the embedding generator and its providers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SemanticError {
    /// The caller supplied an empty or malformed batch.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The embedding provider failed (auth, quota, network, bad response).
    #[error("{0}")]
    Provider(String),
    /// A vector in the batch does not share the batch dimension.
    #[error("embedding {index} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },
    /// Configuration is inconsistent (e.g. a malformed API url).
    #[error("invalid embedding config: {0}")]
    InvalidConfig(String),
}

impl SemanticError {
    /// True when the failure was caused by the caller rather than the provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SemanticError::InvalidInput(_))
    }
}

impl From<reqwest::Error> for SemanticError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SemanticError::Provider(format!("embedding request timed out: {err}"))
        } else {
            SemanticError::Provider(format!("embedding request failed: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_input() {
        let err = SemanticError::InvalidInput("texts must not be empty".into());
        assert!(err.to_string().contains("invalid input"));
        assert!(err.to_string().contains("texts must not be empty"));
        assert!(err.is_client_error());
    }

    #[test]
    fn error_provider_message_is_passed_through() {
        let err = SemanticError::Provider("invalid api token".into());
        assert_eq!(err.to_string(), "invalid api token");
        assert!(!err.is_client_error());
    }

    #[test]
    fn error_dimension_mismatch() {
        let err = SemanticError::DimensionMismatch {
            expected: 1024,
            found: 512,
            index: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("1024"));
        assert!(msg.contains("512"));
        assert!(msg.contains("embedding 2"));
    }

    #[test]
    fn error_clone_and_eq() {
        let err = SemanticError::InvalidConfig("missing api_url".into());
        assert_eq!(err.clone(), err);
    }
}
