//! Similarity search against a vector-indexed collection.
//!
//! [`QueryExecutor`] takes either a precomputed vector or raw text (which the
//! store vectorizes itself) and returns up to `limit` records, nearest first,
//! with the `$vector` field removed.
//!
//! Stores plug in through [`VectorStore`]. [`AstraClient`] talks to the Astra DB
//! Data API; [`InMemoryStore`] ranks by cosine similarity in-process and backs the test suites.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vector::{AstraClient, QueryExecutor, VectorStoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = VectorStoreConfig {
//!         api_endpoint: "https://db-id-us-east1.apps.astra.datastax.com".into(),
//!         token: Some("AstraCS:...".into()),
//!         ..Default::default()
//!     };
//!     let executor = QueryExecutor::new(Arc::new(AstraClient::new(cfg).unwrap()));
//!     let records = executor.query_by_text("library", "books about whales", 20).await.unwrap();
//!     println!("{} records", records.len());
//! }
//! ```

pub mod config;
pub mod error;
pub mod types;

mod astra;
mod executor;
mod store;

pub use crate::astra::AstraClient;
pub use crate::config::VectorStoreConfig;
pub use crate::error::VectorError;
pub use crate::executor::QueryExecutor;
pub use crate::store::{InMemoryStore, VectorStore};
pub use crate::types::{FindRequest, VectorQuery, VECTORIZE_FIELD, VECTOR_FIELD};
