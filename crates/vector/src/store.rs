use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::{FindRequest, VectorError, VectorQuery, VECTOR_FIELD};

/// A collection-oriented store that can answer top-K similarity searches.
///
/// Implementations return records nearest-first. The executor still enforces the
/// limit and strips the vector field, so a store that ignores either is tolerated.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn find(&self, request: &FindRequest) -> Result<Vec<Value>, VectorError>;
}

/// Process-local store ranked by cosine similarity, used as test support.
///
/// The server always talks to [`AstraClient`](crate::AstraClient); nothing in the
/// gateway config selects this store. Only vector-form queries are supported since
/// there is no embedding model behind it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record. Records without a numeric `$vector` array never match.
    pub fn insert(&self, collection: &str, record: Value) {
        let mut guard = self
            .collections
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.entry(collection.to_string()).or_default().push(record);
    }

    pub fn len(&self, collection: &str) -> usize {
        let guard = self
            .collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get(collection).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl VectorStore for InMemoryStore {
    async fn find(&self, request: &FindRequest) -> Result<Vec<Value>, VectorError> {
        let query = match &request.query {
            VectorQuery::Vector(v) => v,
            VectorQuery::Text(_) => {
                return Err(VectorError::Provider(format!(
                    "collection '{}' has no vectorize service configured",
                    request.collection
                )))
            }
        };

        let guard = self
            .collections
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let records = guard.get(&request.collection).ok_or_else(|| {
            VectorError::Provider(format!("collection '{}' does not exist", request.collection))
        })?;

        let mut scored: Vec<(f32, &Value)> = records
            .iter()
            .filter_map(|record| {
                let stored = record_vector(record)?;
                Some((cosine_similarity(query, &stored)?, record))
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(request.limit)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

fn record_vector(record: &Value) -> Option<Vec<f32>> {
    record
        .get(VECTOR_FIELD)?
        .as_array()?
        .iter()
        .map(|v| v.as_f64().map(|f| f as f32))
        .collect()
}

/// `None` when lengths differ or either side has zero norm.
fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0f32, 0f32, 0f32);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
