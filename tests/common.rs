#![allow(dead_code, clippy::unwrap_used)]

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Router, routing::post};
use discord_webhook_proxy::api::{self, AppState};
use discord_webhook_proxy::config::UpstreamConfig;
use discord_webhook_proxy::services::forward_service::ForwardService;
use std::sync::{Arc, Mutex, Once};
use tokio::net::TcpListener;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("discord_webhook_proxy=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// One request as the mock upstream saw it.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub webhook_id: String,
    pub webhook_token: String,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<(u16, String)>>,
}

/// A stand-in for the Discord webhook API: records every request it receives
/// and answers with a programmable status and body (204 + empty by default).
pub struct MockUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<(u16, String)>>,
}

impl MockUpstream {
    pub async fn spawn() -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let response = Arc::new(Mutex::new((204u16, String::new())));
        let state = MockState { requests: requests.clone(), response: response.clone() };

        let router =
            Router::new().route("/{webhook_id}/{webhook_token}", post(record)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { url, requests, response }
    }

    pub fn respond_with(&self, status: u16, body: &str) {
        *self.response.lock().unwrap() = (status, body.to_string());
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<MockState>,
    Path((webhook_id, webhook_token)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    state.requests.lock().unwrap().push(RecordedRequest {
        webhook_id,
        webhook_token,
        content_type,
        body,
    });

    let (status, reply) = state.response.lock().unwrap().clone();
    (StatusCode::from_u16(status).unwrap(), reply)
}

pub struct TestApp {
    pub api_url: String,
    pub client: reqwest::Client,
    pub upstream: MockUpstream,
}

impl TestApp {
    /// Spawns the proxy wired to a fresh mock upstream.
    pub async fn spawn() -> Self {
        let upstream = MockUpstream::spawn().await;
        let api_base = upstream.url.clone();
        Self::spawn_against(upstream, &api_base).await
    }

    /// Spawns the proxy pointed at an arbitrary upstream base URL. The mock
    /// upstream is still started so `recorded()` assertions stay available.
    pub async fn spawn_with_base(api_base: &str) -> Self {
        let upstream = MockUpstream::spawn().await;
        Self::spawn_against(upstream, api_base).await
    }

    async fn spawn_against(upstream: MockUpstream, api_base: &str) -> Self {
        setup_tracing();

        let config =
            UpstreamConfig { api_base: api_base.to_string(), request_timeout_secs: 5 };
        let forward_service = ForwardService::new(&config).unwrap();
        let app = api::app_router(AppState { forward_service });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { api_url, client: reqwest::Client::new(), upstream }
    }

    pub fn webhook_url(&self, webhook_id: &str, webhook_token: &str) -> String {
        format!("{}/api/webhooks/{webhook_id}/{webhook_token}", self.api_url)
    }
}

/// Reserves a local port and immediately releases it, yielding an address
/// that refuses connections.
pub async fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
