pub mod app;
pub mod gemini;
