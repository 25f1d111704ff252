mod common;

use axum::http::{header, StatusCode};
use common::{spawn_proxy, test_config};

#[tokio::test]
async fn health_check_works() {
    let proxy = spawn_proxy(test_config("http://127.0.0.1:9", None)).await;

    let response = reqwest::get(format!("{}/health", proxy)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "gemini-proxy");
}

#[tokio::test]
async fn index_serves_prompt_page() {
    let proxy = spawn_proxy(test_config("http://127.0.0.1:9", None)).await;

    let response = reqwest::get(format!("{}/", proxy)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(response.headers()[header::CONTENT_SECURITY_POLICY]
        .to_str()
        .unwrap()
        .contains("'unsafe-inline'"));

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<textarea id="prompt""#));
    assert!(html.contains(r#"<button id="generate""#));
    assert!(html.contains("data-endpoint="));
    assert!(html.contains("gemini-2.0-flash"));
    assert!(html.contains("Failed to get a response."));
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let proxy = spawn_proxy(test_config("http://127.0.0.1:9", None)).await;

    let response = reqwest::get(format!("{}/nope", proxy)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Not found: /nope");
}

#[tokio::test]
async fn get_on_proxy_endpoint_is_not_allowed() {
    let proxy = spawn_proxy(test_config("http://127.0.0.1:9", None)).await;

    let response = reqwest::get(format!("{}/api/gemini", proxy)).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
