//! reelgate server - HTTP gateway for movie search
//!
//! Keeps provider credentials on the server and exposes a handful of JSON
//! endpoints to the browser:
//!
//! - `POST /api/embed` - `{ texts: string[] }` to one (averaged) embedding vector
//! - `POST /api/datastrax/db/movie` - `{ vector: number[] }` to the nearest movies
//! - `POST /api/datastrax/library` - `{ expression: string }` to the nearest library
//!   records, vectorized by the store
//! - `POST /api/search` - `{ texts: string[] }` embedded and searched in one call
//! - `GET /api/tmdb/{path}` - movie metadata passthrough with the API key attached
//! - `GET /health`, `GET /ready`, `GET /metrics`
//!
//! Every failure is answered as `{ "error": "<message>" }`: 400 for malformed
//! input, 404/405 for unknown routes or methods, 413 for oversized bodies, and
//! 500 when an upstream fails.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::GatewayConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GatewayConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod upstream;

pub use config::{GatewayConfig, TmdbConfig};
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
