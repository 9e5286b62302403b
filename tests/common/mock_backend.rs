//! Mock BeThere backend for integration tests.
//!
//! Plays the role request interception played in the original browser
//! suite: routes are stubbed per method and path pattern, and every
//! request is captured for assertions. Stubbing the same route twice
//! enqueues a follow-up response, so a re-fetch can observe changed
//! backend state (e.g. the vouchers list after a vouch toggle).

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
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
    /// Raw query string, empty if none.
    pub query: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// A stubbed response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn created(body: impl Into<String>) -> Self {
        Self {
            status: 201,
            body: body.into(),
        }
    }

    /// Plain `{"success": true}` acknowledgement.
    pub fn ack() -> Self {
        Self::ok(r#"{"success": true}"#)
    }

    /// Envelope rejection: HTTP 200 with `success: false`.
    pub fn rejected(message: &str) -> Self {
        Self::ok(format!(r#"{{"success": false, "message": "{message}"}}"#))
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

struct Stub {
    method: String,
    pattern: String,
    responses: VecDeque<MockResponse>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    stubs: Arc<Mutex<Vec<Stub>>>,
}

/// Mock backend server for testing.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBackend {
    /// Start a new mock backend server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            stubs: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Stub a route. `pattern` matches the request path exactly, or by
    /// prefix when it ends with `*`. Stubbing the same route again
    /// enqueues a follow-up response: each response but the last is
    /// served once, the last one repeats.
    pub async fn stub(&self, method: &str, pattern: &str, response: MockResponse) {
        let mut stubs = self.state.stubs.lock().await;
        match stubs
            .iter_mut()
            .find(|s| s.method == method && s.pattern == pattern)
        {
            Some(stub) => stub.responses.push_back(response),
            None => stubs.push(Stub {
                method: method.to_string(),
                pattern: pattern.to_string(),
                responses: VecDeque::from([response]),
            }),
        }
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Captured requests matching a method and exact path.
    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<CapturedRequest> {
        self.state
            .requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Clear captured requests and stubs.
    pub async fn clear(&self) {
        self.state.requests.lock().await.clear();
        self.state.stubs.lock().await.clear();
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => path.starts_with(prefix),
        None => path == pattern,
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();

    let body_bytes = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        body: body_bytes,
    });

    let response = {
        let mut stubs = state.stubs.lock().await;
        stubs
            .iter_mut()
            .find(|s| s.method == method && pattern_matches(&s.pattern, &path))
            .map(|stub| {
                if stub.responses.len() > 1 {
                    stub.responses.pop_front().expect("non-empty stub queue")
                } else {
                    stub.responses.front().cloned().expect("non-empty stub queue")
                }
            })
    };

    let (status, body) = match response {
        Some(resp) => (resp.status, resp.body),
        None => (
            404,
            r#"{"success": false, "message": "route not stubbed"}"#.to_string(),
        ),
    };

    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
