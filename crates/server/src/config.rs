use semantic::EmbeddingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use vector::VectorStoreConfig;

use crate::error::{ServerError, ServerResult};

/// Conventional environment names honoured as defaults, below the config file
/// and the `REELGATE_*` overrides.
const ENV_ALIASES: &[(&str, &str)] = &[
    ("embedding.api_key", "COHERE_API_KEY"),
    ("vector_store.api_endpoint", "ASTRA_DB_API_ENDPOINT"),
    ("vector_store.token", "ASTRA_DB_APPLICATION_TOKEN"),
    ("tmdb.api_key", "TMDB_API_KEY"),
];

/// Gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Allow cross-origin browser requests
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log filter, e.g. `info` or `server=debug,semantic=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Install the Prometheus recorder and serve `/metrics`
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub vector_store: VectorStoreConfig,

    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// Movie metadata API settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_url: String,
    /// v3 API key, appended as the `api_key` query parameter.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.themoviedb.org/3".into(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            embedding: EmbeddingConfig::default(),
            vector_store: VectorStoreConfig::default(),
            tmdb: TmdbConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env`, an optional `reelgate.*` file and environment variables.
    ///
    /// Prefixed variables use `_` after the prefix and `__` between nested keys:
    /// `REELGATE_PORT=9000`, `REELGATE_EMBEDDING__MODEL_NAME=embed-english-v3.0`.
    pub fn load() -> anyhow::Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {err}");
            }
        }

        let mut builder = config::Config::builder();
        for (key, var) in ENV_ALIASES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(*key, value)?;
            }
        }

        let config: GatewayConfig = builder
            .add_source(config::File::with_name("reelgate").required(false))
            .add_source(
                config::Environment::with_prefix("REELGATE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the gateway cannot serve with.
    pub fn validate(&self) -> ServerResult<()> {
        self.socket_addr()?;
        if self.vector_store.api_endpoint.trim().is_empty() {
            return Err(ServerError::Config(
                "vector_store.api_endpoint is required (set ASTRA_DB_API_ENDPOINT)".into(),
            ));
        }
        if self.vector_store.default_limit == 0 {
            return Err(ServerError::Config(
                "vector_store.default_limit must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_body_size_mb() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
