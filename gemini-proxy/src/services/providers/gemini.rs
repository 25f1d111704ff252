//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use service_core::error::AppError;

use super::TextProvider;
use crate::config::GeminiSettings;
use crate::error::ProxyError;
use crate::models::{GenerateContentRequest, Generation};

/// Header Gemini reads the API key from.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiTextProvider {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(settings: GeminiSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

        Ok(Self { settings, client })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<Generation, ProxyError> {
        let api_key = self
            .settings
            .api_key
            .as_ref()
            .ok_or(ProxyError::MissingCredential)?;

        let request = GenerateContentRequest::from_prompt(prompt);
        let url = self.settings.generate_content_url();

        tracing::debug!(
            model = %self.settings.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::Upstream { status, body });
        }

        let body = response.bytes().await?;
        let generation =
            Generation::from_bytes(body).map_err(ProxyError::MalformedUpstreamResponse)?;

        match generation.response.candidates().first() {
            None => {
                let reason = generation
                    .response
                    .prompt_feedback
                    .as_ref()
                    .and_then(|f| f.block_reason.as_deref())
                    .unwrap_or("none given");
                tracing::warn!(block_reason = reason, "Gemini returned no candidates");
            }
            Some(first) => {
                tracing::debug!(
                    candidates = generation.response.candidates().len(),
                    finish_reason = ?first.finish_reason,
                    body_len = generation.body.len(),
                    "Received Gemini response"
                );
            }
        }

        Ok(generation)
    }
}
