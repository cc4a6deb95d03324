use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection and query settings for the Astra DB Data API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Database API endpoint, e.g. `https://<db-id>-<region>.apps.astra.datastax.com`.
    pub api_endpoint: String,
    /// Application token, sent in the `Token` header.
    pub token: Option<String>,
    /// Keyspace (namespace) holding the collections.
    pub keyspace: String,
    /// Collection searched by vector.
    pub movie_collection: String,
    /// Collection searched by store-side vectorize.
    pub library_collection: String,
    /// Result-count limit applied when the caller does not give one.
    pub default_limit: usize,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            api_endpoint: String::new(),
            token: None,
            keyspace: "default_keyspace".into(),
            movie_collection: "movie".into(),
            library_collection: "library".into(),
            default_limit: 20,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl VectorStoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// URL of the Data API command endpoint for `collection`.
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/api/json/v1/{}/{}",
            self.api_endpoint.trim_end_matches('/'),
            self.keyspace,
            collection
        )
    }
}
