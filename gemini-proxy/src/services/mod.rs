pub mod providers;

pub use providers::{gemini::GeminiTextProvider, TextProvider};
