use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

use crate::{EmbeddingConfig, EmbeddingProvider, SemanticError};

/// [`EmbeddingProvider`] backed by a Cohere-style HTTP embed endpoint.
///
/// The client is built once and shared; `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct ApiEmbeddingProvider {
    client: reqwest::Client,
    cfg: EmbeddingConfig,
}

impl ApiEmbeddingProvider {
    /// Builds a provider with its own pooled HTTP client using the configured timeouts.
    pub fn new(cfg: EmbeddingConfig) -> Result<Self, SemanticError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .connect_timeout(cfg.connect_timeout())
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| SemanticError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(cfg, client)
    }

    /// Builds a provider around an existing client.
    pub fn with_client(cfg: EmbeddingConfig, client: reqwest::Client) -> Result<Self, SemanticError> {
        reqwest::Url::parse(&cfg.api_url)
            .map_err(|e| SemanticError::InvalidConfig(format!("invalid api_url {:?}: {e}", cfg.api_url)))?;
        Ok(Self { client, cfg })
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.cfg
    }

    fn build_payload(&self, texts: &[String]) -> Value {
        json!({
            "model": self.cfg.model_name,
            "texts": texts,
            "input_type": self.cfg.input_type,
            "embedding_types": ["float"],
        })
    }
}

#[async_trait]
impl EmbeddingProvider for ApiEmbeddingProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SemanticError> {
        let mut request = self
            .client
            .post(&self.cfg.api_url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = self.cfg.api_key.as_deref() {
            request = request.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        let response = request.json(&self.build_payload(texts)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, model = %self.cfg.model_name, "embedding provider rejected request");
            return Err(SemanticError::Provider(provider_message(status, &body)));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SemanticError::from(e)
                } else {
                    SemanticError::Provider(format!("invalid JSON from embedding provider: {e}"))
                }
            })?;
        parse_embeddings_from_value(body)
    }

    fn model_name(&self) -> &str {
        &self.cfg.model_name
    }
}

/// Pulls the human-readable message out of a provider error body, falling back to the raw body.
fn provider_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .or_else(|| value.pointer("/error/message").and_then(Value::as_str))
    });

    match message {
        Some(msg) => msg.to_string(),
        None if body.is_empty() => format!("HTTP {status}"),
        None => format!("HTTP {status}: {body}"),
    }
}

/// Accepts the response shapes of the common embed APIs:
/// `{embeddings: {float: [..]}}`, `{embeddings: [..]}`, `{data: [{embedding: [..]}]}` and a bare array.
fn parse_embeddings_from_value(value: Value) -> Result<Vec<Vec<f32>>, SemanticError> {
    match value {
        Value::Object(mut map) => {
            if let Some(embeddings) = map.remove("embeddings") {
                return match embeddings {
                    Value::Object(mut by_type) => match by_type.remove("float") {
                        Some(floats) => parse_embedding_collection(floats),
                        None => Err(SemanticError::Provider(
                            "embedding response has no `float` embeddings".into(),
                        )),
                    },
                    other => parse_embedding_collection(other),
                };
            }

            if let Some(Value::Array(items)) = map.remove("data") {
                return items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(mut obj) => match obj.remove("embedding") {
                            Some(embedding) => parse_embedding_vector(embedding),
                            None => Err(SemanticError::Provider(
                                "missing `embedding` field in data item".into(),
                            )),
                        },
                        _ => Err(SemanticError::Provider(
                            "unexpected entry inside `data` array".into(),
                        )),
                    })
                    .collect();
            }

            Err(SemanticError::Provider(
                "unsupported embedding response shape".into(),
            ))
        }
        other => parse_embedding_collection(other),
    }
}

fn parse_embedding_collection(value: Value) -> Result<Vec<Vec<f32>>, SemanticError> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_array) => {
            items.into_iter().map(parse_embedding_vector).collect()
        }
        other => parse_embedding_vector(other).map(|vector| vec![vector]),
    }
}

fn parse_embedding_vector(value: Value) -> Result<Vec<f32>, SemanticError> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .map(|entry| match entry {
                Value::Number(num) => num
                    .as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| SemanticError::Provider("non-finite embedding value".into())),
                other => Err(SemanticError::Provider(format!(
                    "embedding entries must be numbers, got {other}"
                ))),
            })
            .collect(),
        other => Err(SemanticError::Provider(format!(
            "embedding vector must be an array, got {other}"
        ))),
    }
}
