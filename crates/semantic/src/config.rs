use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime configuration for the remote embedding provider.
///
/// # Example
/// ```no_run
/// use semantic::{ApiEmbeddingProvider, EmbeddingConfig};
///
/// let cfg = EmbeddingConfig {
///     api_key: Some("co-xxx".into()),
///     expected_dimension: Some(1024),
///     ..Default::default()
/// };
///
/// let provider = ApiEmbeddingProvider::new(cfg).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embed endpoint of the provider.
    pub api_url: String,
    /// Bearer credential. Sent as `Authorization: Bearer <key>` when present.
    pub api_key: Option<String>,
    /// Model identifier sent with every request.
    pub model_name: String,
    /// Intent tag sent with every request (`"search_query"` for query-side embeddings).
    pub input_type: String,
    /// Output dimension of the model. When set, every returned vector is checked against it.
    pub expected_dimension: Option<usize>,
    /// L2-normalize the final vector.
    pub normalize: bool,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.cohere.com/v2/embed".into(),
            api_key: None,
            model_name: "embed-english-v3.0".into(),
            input_type: "search_query".into(),
            expected_dimension: Some(1024),
            normalize: false,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl EmbeddingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
