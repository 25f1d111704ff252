use super::{ClientError, ProxyClient};
use crate::models::GenerateContentResponse;

/// Text shown for every failed request, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to get a response.";

#[derive(Debug, Clone, Default)]
pub struct PromptSession {
    prompt: String,
    response: Option<String>,
    loading: bool,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Text currently on display, if any.
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the trigger control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    /// Enter the loading state and hand out the prompt to send.
    ///
    /// Returns `None`, leaving the state untouched, while the trigger is disabled.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        Some(self.prompt.clone())
    }

    /// Apply the outcome of the request started by [`begin`](Self::begin).
    /// Loading is cleared whatever the outcome.
    pub fn settle(&mut self, outcome: Result<GenerateContentResponse, ClientError>) {
        match outcome {
            Ok(response) => match response.candidates().first() {
                // nothing to show, keep whatever is on display
                None => {}
                Some(candidate) => match candidate.first_part() {
                    // a part without text blanks the display
                    Some(part) => {
                        self.response = part.text.clone().filter(|text| !text.is_empty())
                    }
                    None => {
                        tracing::error!("First candidate carries no content parts");
                        self.response = Some(FAILURE_MESSAGE.to_string());
                    }
                },
            },
            Err(e) => {
                tracing::error!(error = %e, "There was a problem with the prompt request");
                self.response = Some(FAILURE_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// One full click: `begin`, call the proxy, `settle`.
    ///
    /// Returns `false` without any request when the trigger is disabled.
    pub async fn submit(&mut self, client: &ProxyClient) -> bool {
        let Some(prompt) = self.begin() else {
            return false;
        };
        let outcome = client.generate(&prompt).await;
        self.settle(outcome);
        true
    }
}
