#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use gemini_proxy::config::{GeminiSettings, ProxyConfig};
use gemini_proxy::startup::Application;
use secrecy::Secret;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-2.0-flash";

/// One request as seen by the fake Gemini endpoint.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockUpstream {
    status: StatusCode,
    body: String,
    delay: Duration,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

async fn mock_generate_content(
    State(mock): State<MockUpstream>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    mock.received.lock().unwrap().push(ReceivedRequest {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    if !mock.delay.is_zero() {
        tokio::time::sleep(mock.delay).await;
    }

    (
        mock.status,
        [(header::CONTENT_TYPE, "application/json")],
        mock.body,
    )
}

pub struct Upstream {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl Upstream {
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

pub async fn spawn_upstream(status: StatusCode, body: &str) -> Upstream {
    spawn_upstream_with_delay(status, body, Duration::ZERO).await
}

pub async fn spawn_upstream_with_delay(status: StatusCode, body: &str, delay: Duration) -> Upstream {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .fallback(mock_generate_content)
        .with_state(MockUpstream {
            status,
            body: body.to_string(),
            delay,
            received: received.clone(),
        });

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{}", addr),
        received,
    }
}

pub fn test_config(base_url: &str, api_key: Option<&str>) -> ProxyConfig {
    ProxyConfig {
        common: service_core::config::Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        gemini: GeminiSettings {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            base_url: base_url.to_string(),
            model: TEST_MODEL.to_string(),
            timeout_secs: 1,
        },
        otlp_endpoint: None,
    }
}

/// Start the proxy on a random port and return its origin.
pub async fn spawn_proxy(config: ProxyConfig) -> String {
    let application = Application::build(config)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());

    tokio::spawn(async move {
        application.run_until_stopped().await.unwrap();
    });

    address
}

pub async fn post_prompt(proxy: &str, body: &str) -> (StatusCode, Value) {
    let (status, text) = post_prompt_raw(proxy, body, Some("application/json")).await;
    let json = serde_json::from_str(&text).expect("Proxy body is not JSON");
    (status, json)
}

/// Post `body` as-is and return the proxy's reply text untouched.
pub async fn post_prompt_raw(
    proxy: &str,
    body: &str,
    content_type: Option<&str>,
) -> (StatusCode, String) {
    let mut request = reqwest::Client::new()
        .post(format!("{}/api/gemini", proxy))
        .body(body.to_string());
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }

    let response = request.send().await.expect("Failed to reach proxy");
    let status = response.status();
    let text = response.text().await.expect("Failed to read proxy body");
    (status, text)
}
