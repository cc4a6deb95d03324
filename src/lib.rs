//! Workspace umbrella crate for reelgate.
//!
//! This crate stitches the embedding generator and the vector query executor
//! together so callers can go from search text to ranked records with a single
//! call:
//!
//! ```text
//! texts ──► EmbeddingGenerator ──► averaged vector ──► QueryExecutor ──► records
//! ```

pub use semantic::{
    average_embeddings, ApiEmbeddingProvider, EmbeddingConfig, EmbeddingGenerator,
    EmbeddingProvider, SemanticError,
};
pub use vector::{
    AstraClient, FindRequest, InMemoryStore, QueryExecutor, VectorError, VectorQuery,
    VectorStore, VectorStoreConfig, VECTOR_FIELD,
};

use serde_json::Value;
use thiserror::Error;

/// Errors from either stage of a semantic search.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Vector(#[from] VectorError),
}

impl SearchError {
    /// True when the caller's input, not an upstream service, caused the failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            SearchError::Semantic(err) => err.is_client_error(),
            SearchError::Vector(err) => err.is_client_error(),
        }
    }
}

/// Two-stage "search by meaning": embed the texts, then query one collection by vector.
#[derive(Debug, Clone)]
pub struct SemanticSearch {
    generator: EmbeddingGenerator,
    executor: QueryExecutor,
    collection: String,
    limit: usize,
}

impl SemanticSearch {
    pub fn new(
        generator: EmbeddingGenerator,
        executor: QueryExecutor,
        collection: impl Into<String>,
        limit: usize,
    ) -> Self {
        Self {
            generator,
            executor,
            collection: collection.into(),
            limit,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Embeds `texts` into one averaged vector and returns the nearest records.
    pub async fn search(&self, texts: &[String]) -> Result<Vec<Value>, SearchError> {
        let vector = self.generator.generate(texts).await?;
        let records = self
            .executor
            .query_by_vector(&self.collection, vector, self.limit)
            .await?;
        tracing::info!(
            collection = %self.collection,
            inputs = texts.len(),
            returned = records.len(),
            "semantic search complete"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_classification() {
        let err: SearchError = SemanticError::InvalidInput("empty".into()).into();
        assert!(err.is_client_error());

        let err: SearchError = VectorError::Provider("down".into()).into();
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "down");
    }
}
