//! Generic "fetch JSON from a URL" plumbing shared by the passthrough routes.

use axum::http::StatusCode;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

use crate::config::TmdbConfig;
use crate::error::{ServerError, ServerResult};

/// GET `url` and return its JSON body, mapping every failure onto [`ServerError`].
pub async fn fetch_json(client: &reqwest::Client, url: Url) -> ServerResult<Value> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ServerError::UpstreamStatus {
            status: StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: upstream_message(status.as_u16(), &body),
        });
    }

    serde_json::from_str(&body)
        .map_err(|e| ServerError::Upstream(format!("upstream returned invalid JSON: {e}")))
}

/// TMDB's `status_message`, a generic `message`, or the bare status line.
fn upstream_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("status_message")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("upstream responded with HTTP {status}"))
}

/// Read-only client for the movie metadata API. Adds the API key server-side.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base: Url,
    api_key: Option<String>,
}

impl TmdbClient {
    pub fn new(cfg: &TmdbConfig) -> ServerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ServerError::Config(format!("failed to build TMDB client: {e}")))?;
        let base = Url::parse(cfg.api_url.trim_end_matches('/'))
            .map_err(|e| ServerError::Config(format!("invalid tmdb.api_url: {e}")))?;
        Ok(Self {
            client,
            base,
            api_key: cfg.api_key.clone(),
        })
    }

    /// Builds `<base>/<path>?<query>&api_key=<key>`.
    pub fn url_for(&self, path: &str, query: Option<&str>) -> ServerResult<Url> {
        let path = path.trim_start_matches('/');
        if path.is_empty() || path.split('/').any(|seg| seg == "..") {
            return Err(ServerError::BadRequest(format!("invalid TMDB path: {path:?}")));
        }

        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ServerError::Config("tmdb.api_url cannot be a base URL".into()))?;
            segments.pop_if_empty().extend(path.split('/'));
        }
        url.set_query(query.filter(|q| !q.is_empty()));
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("api_key", key);
        }
        Ok(url)
    }

    pub async fn get(&self, path: &str, query: Option<&str>) -> ServerResult<Value> {
        let url = self.url_for(path, query)?;
        fetch_json(&self.client, url).await
    }
}
