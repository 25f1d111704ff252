pub mod gemini;
pub mod prompt;

pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Generation, Part,
    PromptFeedback,
};
pub use prompt::{ErrorPayload, PromptRequest};
