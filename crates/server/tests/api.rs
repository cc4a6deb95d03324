//! Integration tests for the HTTP surface, driven through the router with
//! in-process fakes for the embedding provider and the vector store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use semantic::{EmbeddingProvider, SemanticError};
use serde_json::{json, Value};
use server::{build_router, GatewayConfig, ServerState, TmdbConfig};
use tower::ServiceExt;
use vector::{FindRequest, VectorError, VectorQuery, VectorStore, VECTOR_FIELD};

const DIM: usize = 1024;

/// Every text embeds to a constant vector; "fail" triggers a provider error.
struct FakeProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl EmbeddingProvider for FakeProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SemanticError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if texts.iter().any(|t| t == "fail") {
            return Err(SemanticError::Provider("invalid api token".into()));
        }
        Ok(texts
            .iter()
            .enumerate()
            .map(|(i, _)| vec![i as f32; DIM])
            .collect())
    }

    fn model_name(&self) -> &str {
        "fake-embed"
    }
}

/// Returns 50 records, vectors included, and ignores the limit.
struct FakeStore;

#[async_trait]
impl VectorStore for FakeStore {
    async fn find(&self, request: &FindRequest) -> Result<Vec<Value>, VectorError> {
        if let VectorQuery::Text(text) = &request.query {
            if text == "explode" {
                return Err(VectorError::Provider("Collection does not exist".into()));
            }
        }
        Ok((0..50)
            .map(|i| {
                json!({
                    "_id": format!("{}-{i}", request.collection),
                    "title": format!("record {i}"),
                    "$vector": [0.1, 0.2, 0.3],
                })
            })
            .collect())
    }
}

fn test_config() -> GatewayConfig {
    GatewayConfig::default()
}

fn app_with(config: GatewayConfig) -> (Router, Arc<FakeProvider>) {
    let provider = Arc::new(FakeProvider {
        calls: AtomicUsize::new(0),
    });
    let state = ServerState::with_components(config, provider.clone(), Arc::new(FakeStore))
        .expect("Failed to create test state");
    (build_router(Arc::new(state)), provider)
}

fn app() -> Router {
    app_with(test_config()).0
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}

fn error_message(body: &Value) -> &str {
    body["error"].as_str().expect("error body")
}

#[tokio::test]
async fn embed_single_text_returns_vector() {
    let (status, body) = post_json(app(), "/api/embed", json!({"texts": ["heist"]})).await;

    assert_eq!(status, StatusCode::OK);
    let vector = body.as_array().unwrap();
    assert_eq!(vector.len(), DIM);
    assert_eq!(vector[0], 0.0);
}

#[tokio::test]
async fn embed_multiple_texts_returns_average() {
    let (app, provider) = app_with(test_config());
    let (status, body) = post_json(app, "/api/embed", json!({"texts": ["a", "b", "c"]})).await;

    assert_eq!(status, StatusCode::OK);
    // vectors are all-0, all-1, all-2
    assert_eq!(body[0], 1.0);
    assert_eq!(body[DIM - 1], 1.0);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn embed_rejects_empty_texts() {
    let (app, provider) = app_with(test_config());
    let (status, body) = post_json(app, "/api/embed", json!({"texts": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("texts"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn embed_rejects_missing_or_wrongly_typed_texts() {
    for body in [json!({}), json!({"texts": "heist"}), json!({"texts": [1, 2]})] {
        let (status, response) = post_json(app(), "/api/embed", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(!error_message(&response).is_empty());
    }
}

#[tokio::test]
async fn embed_rejects_invalid_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/embed")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn embed_provider_failure_is_500_with_message() {
    let (status, body) = post_json(app(), "/api/embed", json!({"texts": ["fail"]})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "invalid api token"}));
}

#[tokio::test]
async fn embed_dimension_mismatch_is_500() {
    let mut config = test_config();
    config.embedding.expected_dimension = Some(768);
    let (app, _) = app_with(config);

    let (status, body) = post_json(app, "/api/embed", json!({"texts": ["heist"]})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(&body).contains("768"));
}

#[tokio::test]
async fn movie_query_returns_bounded_vector_free_records() {
    let vector: Vec<f32> = (0..DIM).map(|i| i as f32 / DIM as f32).collect();
    let (status, body) = post_json(app(), "/api/datastrax/db/movie", json!({"vector": vector})).await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 20);
    assert!(records.iter().all(|r| r.get(VECTOR_FIELD).is_none()));
    assert_eq!(records[0]["_id"], "movie-0");
}

#[tokio::test]
async fn movie_query_rejects_empty_or_missing_vector() {
    for body in [json!({"vector": []}), json!({}), json!({"vector": "0.1,0.2"})] {
        let (status, response) = post_json(app(), "/api/datastrax/db/movie", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(response.get("error").is_some());
    }
}

#[tokio::test]
async fn library_query_uses_library_collection() {
    let (status, body) = post_json(
        app(),
        "/api/datastrax/library",
        json!({"expression": "books about whales"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 20);
    assert_eq!(records[0]["_id"], "library-0");
    assert!(records.iter().all(|r| r.get(VECTOR_FIELD).is_none()));
}

#[tokio::test]
async fn library_query_rejects_non_string_expression() {
    for body in [json!({}), json!({"expression": 42}), json!({"expression": ["a"]})] {
        let (status, _) = post_json(app(), "/api/datastrax/library", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn library_store_failure_is_500_with_message() {
    let (status, body) =
        post_json(app(), "/api/datastrax/library", json!({"expression": "explode"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(&body), "Collection does not exist");
}

#[tokio::test]
async fn configured_limit_applies_to_queries() {
    let mut config = test_config();
    config.vector_store.default_limit = 5;
    let (app, _) = app_with(config);

    let (status, body) = post_json(app, "/api/search", json!({"texts": ["space", "crime"]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn search_rejects_empty_texts() {
    let (status, _) = post_json(app(), "/api/search", json!({"texts": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tmdb_passthrough_forwards_path_query_and_key() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", "/3/search/movie")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("query".into(), "alien".into()),
            mockito::Matcher::UrlEncoded("api_key".into(), "tmdb-secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page":1,"results":[{"id":348,"title":"Alien"}]}"#)
        .create_async()
        .await;

    let mut config = test_config();
    config.tmdb = TmdbConfig {
        api_url: format!("{}/3", upstream.url()),
        api_key: Some("tmdb-secret".into()),
        ..Default::default()
    };
    let (app, _) = app_with(config);

    let request = Request::builder()
        .uri("/api/tmdb/search/movie?query=alien")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["title"], "Alien");
    mock.assert_async().await;
}

#[tokio::test]
async fn tmdb_unreachable_is_500_with_error_body() {
    let mut config = test_config();
    config.tmdb = TmdbConfig {
        api_url: "http://127.0.0.1:9/3".into(),
        timeout_secs: 2,
        ..Default::default()
    };
    let (app, _) = app_with(config);

    let request = Request::builder()
        .uri("/api/tmdb/movie/348")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(&body).contains("upstream"));
}

#[tokio::test]
async fn health_and_ready_report_service() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["embedding_model"], "fake-embed");
    assert_eq!(body["components"]["embedding"], "missing_credentials");
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let request = Request::builder().uri("/api/nope").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn wrong_method_on_known_route_is_405_json() {
    for (method, uri) in [("GET", "/api/embed"), ("DELETE", "/api/datastrax/db/movie"), ("POST", "/health")] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn oversized_body_is_413_json() {
    let numbers = vec!["0.1234567"; 400_000].join(",");
    let request = Request::builder()
        .method("POST")
        .uri("/api/datastrax/db/movie")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"vector":[{numbers}]}}"#)))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(error_message(&body).contains("length limit"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}
