//! Client side of the prompt UI.
//!
//! [`PromptSession`] holds the same three pieces of state as the browser page
//! (prompt text, displayed response, loading flag) and applies the same
//! rules; [`ProxyClient`] performs the single `POST` to the proxy.

pub mod proxy_client;
pub mod session;

pub use proxy_client::{ClientError, ProxyClient};
pub use session::{PromptSession, FAILURE_MESSAGE};
