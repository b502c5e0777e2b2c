//! Mock analysis backend for exercising the HTTP client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::Response;
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("captured body is not JSON")
    }
}

/// A canned response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }
}

#[derive(Default)]
struct Shared {
    requests: Vec<CapturedRequest>,
    responses: VecDeque<MockResponse>,
}

/// In-process analysis backend bound to an ephemeral port.
pub struct MockBackend {
    addr: SocketAddr,
    shared: Arc<Mutex<Shared>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().unwrap();

        let shared = Arc::new(Mutex::new(Shared::default()));
        let app = Router::new()
            .route("/analyze", any(handler))
            .with_state(Arc::clone(&shared));

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, shared }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn push_response(&self, response: MockResponse) {
        self.shared.lock().await.responses.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.shared.lock().await.requests.clone()
    }
}

async fn handler(State(shared): State<Arc<Mutex<Shared>>>, req: Request) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let body = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .unwrap_or_default()
        .to_vec();

    let mut shared = shared.lock().await;
    shared.requests.push(CapturedRequest {
        method,
        path,
        content_type,
        body,
    });

    let response = shared
        .responses
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(r#"{"summary":""}"#));

    Response::builder()
        .status(response.status)
        .header("content-type", response.content_type)
        .body(Body::from(response.body))
        .expect("Failed to build mock response")
}
