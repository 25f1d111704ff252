use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{GenerateContentResponse, PromptRequest};
use crate::GENERATE_PATH;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("proxy answered with status {0}")]
    Status(StatusCode),

    #[error("request to proxy failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Calls a running proxy's `POST /api/gemini`.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    /// `base_url` is the proxy origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PromptRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}
