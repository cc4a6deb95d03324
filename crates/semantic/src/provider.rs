use async_trait::async_trait;

use crate::SemanticError;

/// A remote (or fake) source of embedding vectors.
///
/// Implementations must return one vector per input, in input order, and must make
/// a single batched call per invocation.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed every string in `texts`.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SemanticError>;

    /// Model identifier used for every request, surfaced in logs.
    fn model_name(&self) -> &str;
}
