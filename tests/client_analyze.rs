mod common;

use common::mock_backend::{MockBackend, MockResponse};
use ir_console::api::{AnalysisClient, AnalysisError, DEFAULT_TOP_K};
use ir_console::config::ApiConfig;
use serde_json::json;

fn client_for(backend: &MockBackend) -> AnalysisClient {
    AnalysisClient::new(&ApiConfig::new(backend.base_url()))
}

#[tokio::test]
async fn analyze_posts_expected_body_and_parses_response() {
    let backend = MockBackend::start().await;
    backend
        .push_response(MockResponse::json(
            r#"{"summary":"Possible brute-force attempt","mitre_matches":[{"technique_id":"T1110","name":"Brute Force","tactic":"Credential Access","evidence":"Failed password"}],"evidence":[]}"#,
        ))
        .await;

    let client = client_for(&backend);
    let response = client
        .analyze("Failed password for root from 10.0.0.5", DEFAULT_TOP_K)
        .await
        .expect("analysis should succeed");

    assert_eq!(response.summary, "Possible brute-force attempt");
    assert_eq!(response.mitre_matches.len(), 1);
    assert_eq!(response.mitre_matches[0].technique_id, "T1110");
    assert!(response.evidence.is_empty());

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/analyze");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].body_json(),
        json!({"log_text": "Failed password for root from 10.0.0.5", "top_k": 6})
    );
}

#[tokio::test]
async fn non_success_status_maps_to_http_error_with_body() {
    let backend = MockBackend::start().await;
    backend
        .push_response(MockResponse::error(500, "internal error"))
        .await;

    let client = client_for(&backend);
    let err = client
        .analyze("some log line", DEFAULT_TOP_K)
        .await
        .expect_err("500 should fail");

    assert!(matches!(err, AnalysisError::Http { status: 500, .. }));
    assert_eq!(
        err.to_string(),
        "API returned 500 Internal Server Error: internal error"
    );
}

#[tokio::test]
async fn empty_error_body_is_omitted_from_message() {
    let backend = MockBackend::start().await;
    backend.push_response(MockResponse::error(502, "")).await;

    let client = client_for(&backend);
    let err = client
        .analyze("some log line", DEFAULT_TOP_K)
        .await
        .expect_err("502 should fail");

    assert_eq!(err.to_string(), "API returned 502 Bad Gateway");
}

#[tokio::test]
async fn invalid_json_body_maps_to_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .push_response(MockResponse::json("this is not json"))
        .await;

    let client = client_for(&backend);
    let err = client
        .analyze("some log line", DEFAULT_TOP_K)
        .await
        .expect_err("garbage body should fail");

    assert!(matches!(err, AnalysisError::Decode { .. }));
}

#[tokio::test]
async fn connection_refused_maps_to_transport_error() {
    let port = common::free_port();
    let client = AnalysisClient::new(&ApiConfig::new(format!("http://127.0.0.1:{port}")));

    let err = client
        .analyze("some log line", DEFAULT_TOP_K)
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, AnalysisError::Transport { .. }));
    assert!(err.to_string().starts_with("request failed:"));
}

#[tokio::test]
async fn sparse_response_fields_are_tolerated() {
    let backend = MockBackend::start().await;
    backend
        .push_response(MockResponse::json(r#"{"summary":"nothing notable"}"#))
        .await;

    let client = client_for(&backend);
    let response = client
        .analyze("benign line", DEFAULT_TOP_K)
        .await
        .expect("sparse body should decode");

    assert_eq!(response.summary, "nothing notable");
    assert!(response.mitre_matches.is_empty());
    assert!(response.evidence.is_empty());
}
