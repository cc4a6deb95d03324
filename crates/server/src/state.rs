use metrics_exporter_prometheus::PrometheusHandle;
use reelgate::SemanticSearch;
use semantic::{ApiEmbeddingProvider, EmbeddingGenerator, EmbeddingProvider};
use std::sync::Arc;
use std::time::Instant;
use vector::{AstraClient, QueryExecutor, VectorStore};

use crate::config::GatewayConfig;
use crate::error::ServerResult;
use crate::upstream::TmdbClient;

/// Shared application state. Every client inside is cheap to clone and safe to
/// use from concurrent requests.
#[derive(Clone)]
pub struct ServerState {
    /// Gateway configuration
    pub config: Arc<GatewayConfig>,

    /// Turns query texts into one vector
    pub generator: EmbeddingGenerator,

    /// Top-K searches against the vector store
    pub executor: QueryExecutor,

    /// Embed-then-search over the movie collection
    pub search: SemanticSearch,

    /// Movie metadata passthrough
    pub tmdb: TmdbClient,

    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,

    pub started_at: Instant,
}

impl ServerState {
    /// Create state backed by the real embedding provider and Astra DB client.
    pub fn new(config: GatewayConfig) -> ServerResult<Self> {
        config.validate()?;
        let provider = Arc::new(ApiEmbeddingProvider::new(config.embedding.clone())?);
        let store = Arc::new(AstraClient::new(config.vector_store.clone())?);
        Self::with_components(config, provider, store)
    }

    /// Create state around caller-supplied provider and store (fakes in tests).
    pub fn with_components(
        config: GatewayConfig,
        provider: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
    ) -> ServerResult<Self> {
        let generator = EmbeddingGenerator::from_config(provider, &config.embedding);
        let executor = QueryExecutor::new(store);
        let search = SemanticSearch::new(
            generator.clone(),
            executor.clone(),
            config.vector_store.movie_collection.clone(),
            config.vector_store.default_limit,
        );
        let tmdb = TmdbClient::new(&config.tmdb)?;

        Ok(Self {
            config: Arc::new(config),
            generator,
            executor,
            search,
            tmdb,
            metrics: None,
            started_at: Instant::now(),
        })
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
