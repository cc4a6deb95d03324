use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Field holding the stored embedding. Never returned to callers.
pub const VECTOR_FIELD: &str = "$vector";

/// Sort key asking the store to embed the query text itself.
pub const VECTORIZE_FIELD: &str = "$vectorize";

/// Similarity-search key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorQuery {
    /// Precomputed query vector, usually the averaged output of the embedding generator.
    Vector(Vec<f32>),
    /// Raw text, vectorized by the store before searching.
    Text(String),
}

impl VectorQuery {
    /// `"vector"` or `"text"`, for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            VectorQuery::Vector(_) => "vector",
            VectorQuery::Text(_) => "text",
        }
    }

    fn sort_clause(&self) -> Value {
        match self {
            VectorQuery::Vector(v) => json!({ VECTOR_FIELD: v }),
            VectorQuery::Text(t) => json!({ VECTORIZE_FIELD: t }),
        }
    }
}

/// One top-K similarity search against a named collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FindRequest {
    pub collection: String,
    pub query: VectorQuery,
    pub limit: usize,
}

impl FindRequest {
    /// Data API `find` command: sorted by similarity, vector field projected out.
    pub fn to_command(&self) -> Value {
        json!({
            "find": {
                "sort": self.query.sort_clause(),
                "projection": { VECTOR_FIELD: 0 },
                "options": { "limit": self.limit },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_command_shape() {
        let req = FindRequest {
            collection: "movie".into(),
            query: VectorQuery::Vector(vec![0.5, 0.25]),
            limit: 20,
        };
        assert_eq!(
            req.to_command(),
            json!({
                "find": {
                    "sort": {"$vector": [0.5, 0.25]},
                    "projection": {"$vector": 0},
                    "options": {"limit": 20}
                }
            })
        );
    }

    #[test]
    fn text_command_uses_vectorize() {
        let req = FindRequest {
            collection: "library".into(),
            query: VectorQuery::Text("books about whales".into()),
            limit: 5,
        };
        let cmd = req.to_command();
        assert_eq!(cmd["find"]["sort"]["$vectorize"], "books about whales");
        assert_eq!(cmd["find"]["projection"]["$vector"], 0);
        assert_eq!(cmd["find"]["options"]["limit"], 5);
    }

    #[test]
    fn query_kind() {
        assert_eq!(VectorQuery::Vector(vec![]).kind(), "vector");
        assert_eq!(VectorQuery::Text(String::new()).kind(), "text");
    }
}
