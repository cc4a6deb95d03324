use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::{FindRequest, VectorError, VectorQuery, VectorStore, VECTOR_FIELD};

/// Runs top-K similarity searches and enforces the result contract:
/// at most `limit` records, none carrying the vector field.
#[derive(Clone)]
pub struct QueryExecutor {
    store: Arc<dyn VectorStore>,
}

impl QueryExecutor {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    /// Vector-form search with a precomputed query vector.
    pub async fn query_by_vector(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: usize,
    ) -> Result<Vec<Value>, VectorError> {
        self.query(collection, VectorQuery::Vector(vector), limit).await
    }

    /// Text-form search; the store vectorizes `text` itself.
    pub async fn query_by_text(
        &self,
        collection: &str,
        text: impl Into<String>,
        limit: usize,
    ) -> Result<Vec<Value>, VectorError> {
        self.query(collection, VectorQuery::Text(text.into()), limit).await
    }

    pub async fn query(
        &self,
        collection: &str,
        query: VectorQuery,
        limit: usize,
    ) -> Result<Vec<Value>, VectorError> {
        validate(collection, &query, limit)?;

        let request = FindRequest {
            collection: collection.to_string(),
            query,
            limit,
        };
        let start = Instant::now();
        let mut records = self.store.find(&request).await?;

        records.truncate(limit);
        for record in &mut records {
            if let Value::Object(map) = record {
                map.remove(VECTOR_FIELD);
            }
        }

        tracing::debug!(
            collection,
            kind = request.query.kind(),
            limit,
            returned = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "vector query complete"
        );
        Ok(records)
    }
}

fn validate(collection: &str, query: &VectorQuery, limit: usize) -> Result<(), VectorError> {
    if collection.trim().is_empty() {
        return Err(VectorError::InvalidInput("collection name must not be empty".into()));
    }
    if limit == 0 {
        return Err(VectorError::InvalidInput("limit must be a positive integer".into()));
    }
    if let VectorQuery::Vector(v) = query {
        if v.is_empty() {
            return Err(VectorError::InvalidInput("vector must be a non-empty array of numbers".into()));
        }
        if v.iter().any(|x| !x.is_finite()) {
            return Err(VectorError::InvalidInput("vector must contain only finite numbers".into()));
        }
    }
    Ok(())
}

impl std::fmt::Debug for QueryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExecutor").finish_non_exhaustive()
    }
}
