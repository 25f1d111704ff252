use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::ProxyError;
use crate::models::PromptRequest;
use crate::AppState;

/// `POST /api/gemini`: forward the prompt and relay the upstream body byte-for-byte.
///
/// The body is read as JSON whatever its `Content-Type`.
#[tracing::instrument(name = "gemini_generate", skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request: PromptRequest = serde_json::from_slice(&body)
        .map_err(|e| ProxyError::InvalidRequest(e.to_string()))?;

    let generation = state.text_provider.generate(&request.prompt).await?;

    tracing::info!(
        candidates = generation.response.candidates().len(),
        "Relayed Gemini response"
    );

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        generation.body,
    )
        .into_response())
}
