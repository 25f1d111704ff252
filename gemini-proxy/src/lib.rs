pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use config::ProxyConfig;
use services::TextProvider;
use std::sync::Arc;

/// Route of the proxy endpoint; the page and the CLI both post here.
pub const GENERATE_PATH: &str = "/api/gemini";

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

impl AppState {
    pub fn new(config: ProxyConfig, text_provider: Arc<dyn TextProvider>) -> Self {
        Self {
            config,
            text_provider,
        }
    }
}
