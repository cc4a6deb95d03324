use std::sync::Arc;
use std::time::Instant;

use crate::average::{average_embeddings, check_dimensions, l2_normalize};
use crate::{EmbeddingConfig, EmbeddingProvider, SemanticError};

/// Turns one or more query strings into a single vector of the provider's dimension.
#[derive(Clone)]
pub struct EmbeddingGenerator {
    provider: Arc<dyn EmbeddingProvider>,
    expected_dimension: Option<usize>,
    normalize: bool,
}

impl EmbeddingGenerator {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            expected_dimension: None,
            normalize: false,
        }
    }

    /// Wraps `provider` with the dimension check and normalization from `cfg`.
    pub fn from_config(provider: Arc<dyn EmbeddingProvider>, cfg: &EmbeddingConfig) -> Self {
        Self::new(provider)
            .with_expected_dimension(cfg.expected_dimension)
            .with_normalize(cfg.normalize)
    }

    /// Reject provider output whose length differs from `dim`.
    pub fn with_expected_dimension(mut self, dim: Option<usize>) -> Self {
        self.expected_dimension = dim;
        self
    }

    /// L2-normalize the final vector.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Embeds `texts` in one provider call and averages the result.
    ///
    /// A single input yields its vector unchanged. Several inputs yield the
    /// element-wise mean.
    pub async fn generate(&self, texts: &[String]) -> Result<Vec<f32>, SemanticError> {
        if texts.is_empty() {
            return Err(SemanticError::InvalidInput(
                "texts must be a non-empty array of strings".into(),
            ));
        }

        let start = Instant::now();
        let vectors = self.provider.embed(texts).await?;

        if vectors.len() != texts.len() {
            return Err(SemanticError::Provider(format!(
                "embedding provider returned {} embeddings for {} inputs",
                vectors.len(),
                texts.len()
            )));
        }
        if let Some(dim) = self.expected_dimension {
            check_dimensions(&vectors, dim)?;
        }

        let mut vector = average_embeddings(vectors)?;
        if self.normalize {
            l2_normalize(&mut vector);
        }

        tracing::debug!(
            model = %self.provider.model_name(),
            inputs = texts.len(),
            dim = vector.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generated query embedding"
        );
        Ok(vector)
    }
}

impl std::fmt::Debug for EmbeddingGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingGenerator")
            .field("model", &self.provider.model_name())
            .field("expected_dimension", &self.expected_dimension)
            .field("normalize", &self.normalize)
            .finish()
    }
}
