//! Query embeddings for reelgate.
//!
//! This crate turns one or more search strings into a single vector that can be
//! handed to a vector store. Each call makes one batched request to the
//! embedding provider. When more than one string comes back embedded, the
//! vectors are averaged element-wise into one.
//!
//! The provider sits behind the [`EmbeddingProvider`] trait so the server can
//! inject the real HTTP client ([`ApiEmbeddingProvider`]) and tests can inject
//! fakes.
//!
//! ## Quick example
//!
//! ```no_run
//! use std::sync::Arc;
//! use semantic::{ApiEmbeddingProvider, EmbeddingConfig, EmbeddingGenerator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = EmbeddingConfig {
//!         api_key: Some("YOUR_COHERE_KEY".into()),
//!         ..Default::default()
//!     };
//!     let provider = Arc::new(ApiEmbeddingProvider::new(cfg.clone()).unwrap());
//!     let generator = EmbeddingGenerator::from_config(provider, &cfg);
//!
//!     let texts = vec!["slow-burn sci-fi".to_string(), "lonely astronaut".to_string()];
//!     let vector = generator.generate(&texts).await.unwrap();
//!     assert_eq!(vector.len(), 1024);
//! }
//! ```

pub mod average;
pub mod config;
pub mod error;

mod api;
mod generator;
mod provider;

pub use crate::api::ApiEmbeddingProvider;
pub use crate::average::average_embeddings;
pub use crate::config::EmbeddingConfig;
pub use crate::error::SemanticError;
pub use crate::generator::EmbeddingGenerator;
pub use crate::provider::EmbeddingProvider;
