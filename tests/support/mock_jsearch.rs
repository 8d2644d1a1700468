use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alljob::config::Config;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_HOST: &str = "jsearch.test";

/// One request as seen by the mock API
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
    pub api_key: Option<String>,
    pub api_host: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Value,
    /// Requests for this `page` are answered only after `delay`
    slow_page: Option<(String, Duration)>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for the JSearch API on an ephemeral port
pub struct MockJSearch {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockJSearch {
    /// Serve `body` with `status` for both endpoints
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_with_slow_page(status, body, None).await
    }

    pub async fn start_with_slow_page(
        status: StatusCode,
        body: Value,
        slow_page: Option<(&str, Duration)>,
    ) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body,
            slow_page: slow_page.map(|(page, delay)| (page.to_string(), delay)),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/search", get(respond))
            .route("/job-details", get(respond))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            api_key: TEST_API_KEY.to_string(),
            api_host: TEST_API_HOST.to_string(),
            base_url: self.base_url.clone(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<MockState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let delay = state
        .slow_page
        .as_ref()
        .filter(|(page, _)| params.get("page") == Some(page))
        .map(|(_, delay)| *delay);

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        params,
        api_key: header("x-rapidapi-key"),
        api_host: header("x-rapidapi-host"),
    });

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    (state.status, Json(state.body))
}
