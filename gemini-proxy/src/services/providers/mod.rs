//! Text generation providers.
//!
//! The proxy handler only sees [`TextProvider`], so tests can swap the real
//! Gemini client for an in-process stub.

pub mod gemini;

use async_trait::async_trait;

use crate::error::ProxyError;
use crate::models::Generation;

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Forward one prompt upstream and return the reply.
    async fn generate(&self, prompt: &str) -> Result<Generation, ProxyError>;
}
