use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorPayload;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "API key not configured.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to get a response from Gemini.";

/// Failures of `POST /api/gemini`.
///
/// Every variant answers 500. Detail stays in the logs; apart from the missing
/// key, the client always gets the same generic message.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid request body: {0}")]
    InvalidRequest(String),

    #[error("API key not configured")]
    MissingCredential,

    #[error("Gemini API error: {status} - {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("failed to call Gemini API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed Gemini response: {0}")]
    MalformedUpstreamResponse(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Message safe to hand to the browser.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            ProxyError::InvalidRequest(_)
            | ProxyError::Upstream { .. }
            | ProxyError::Transport(_)
            | ProxyError::MalformedUpstreamResponse(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::InvalidRequest(detail) => {
                tracing::warn!(detail = %detail, "Rejected prompt request");
            }
            ProxyError::MissingCredential => {
                tracing::error!("Gemini API key not configured");
            }
            _ => {
                tracing::error!(error = %self, "Error calling Gemini API");
            }
        }

        (
            self.status_code(),
            Json(ErrorPayload {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
