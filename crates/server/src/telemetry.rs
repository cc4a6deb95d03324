//! Logging and metrics setup.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Structured JSON logs filtered by `log_level` (`RUST_LOG` syntax).
pub fn init_tracing(log_level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .json()
        .try_init();
    if let Err(err) = result {
        tracing::debug!("tracing subscriber already installed: {err}");
    }
}

/// Installs the global Prometheus recorder. Only one recorder may exist per process.
pub fn install_metrics_recorder() -> anyhow::Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Records one finished HTTP request.
pub fn record_request(method: &str, status: u16, started: Instant) {
    metrics::counter!(
        "reelgate_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("reelgate_request_duration_seconds").record(started.elapsed().as_secs_f64());
}

/// Records one call to an external service (`embedding`, `vector_store`, `search`, `tmdb`).
pub fn record_upstream(upstream: &'static str, started: Instant, ok: bool) {
    metrics::histogram!("reelgate_upstream_seconds", "upstream" => upstream)
        .record(started.elapsed().as_secs_f64());
    if !ok {
        metrics::counter!("reelgate_upstream_errors_total", "upstream" => upstream).increment(1);
    }
}
