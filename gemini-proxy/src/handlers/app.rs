use askama::Template;
use axum::{extract::State, http::Uri, response::Html, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

use crate::{AppState, GENERATE_PATH};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub model: &'a str,
    pub endpoint: &'a str,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        model: &state.config.gemini.model,
        endpoint: GENERATE_PATH,
    }
    .render()
    .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

    Ok(Html(page))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "gemini-proxy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("{}", uri.path()))
}
