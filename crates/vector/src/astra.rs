use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::{FindRequest, VectorError, VectorStore, VectorStoreConfig};

/// [`VectorStore`] speaking the Astra DB Data API (JSON `find` commands over HTTP).
#[derive(Debug, Clone)]
pub struct AstraClient {
    client: reqwest::Client,
    cfg: VectorStoreConfig,
}

impl AstraClient {
    pub fn new(cfg: VectorStoreConfig) -> Result<Self, VectorError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .connect_timeout(cfg.connect_timeout())
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| VectorError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(cfg, client)
    }

    pub fn with_client(cfg: VectorStoreConfig, client: reqwest::Client) -> Result<Self, VectorError> {
        if cfg.api_endpoint.trim().is_empty() {
            return Err(VectorError::InvalidConfig("api_endpoint is required".into()));
        }
        reqwest::Url::parse(&cfg.api_endpoint).map_err(|e| {
            VectorError::InvalidConfig(format!("invalid api_endpoint {:?}: {e}", cfg.api_endpoint))
        })?;
        Ok(Self { client, cfg })
    }

    pub fn config(&self) -> &VectorStoreConfig {
        &self.cfg
    }
}

#[async_trait]
impl VectorStore for AstraClient {
    async fn find(&self, request: &FindRequest) -> Result<Vec<Value>, VectorError> {
        let url = self.cfg.collection_url(&request.collection);
        let mut http = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.cfg.token.as_deref() {
            http = http.header("Token", token);
        }

        let response = http.json(&request.to_command()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: Option<Value> = serde_json::from_str(&body).ok();

        // The Data API reports command failures in an `errors` array, often with HTTP 200.
        if let Some(message) = parsed.as_ref().and_then(first_error_message) {
            tracing::warn!(%status, collection = %request.collection, "vector store returned errors");
            return Err(VectorError::Provider(message));
        }
        if !status.is_success() {
            tracing::warn!(%status, collection = %request.collection, "vector store rejected request");
            return Err(VectorError::Provider(if body.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {body}")
            }));
        }

        match parsed {
            Some(Value::Object(mut map)) => match map
                .remove("data")
                .and_then(|mut data| data.get_mut("documents").map(Value::take))
            {
                Some(Value::Array(documents)) => Ok(documents),
                _ => Err(VectorError::Provider(
                    "vector store response is missing data.documents".into(),
                )),
            },
            _ => Err(VectorError::Provider(
                "vector store returned a non-JSON response".into(),
            )),
        }
    }
}

fn first_error_message(body: &Value) -> Option<String> {
    let first = body.get("errors")?.as_array()?.first()?;
    let message = first
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| first.to_string());
    Some(match first.get("errorCode").and_then(Value::as_str) {
        Some(code) => format!("{code}: {message}"),
        None => message,
    })
}
