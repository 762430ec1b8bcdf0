//! Provider dispatch and prompt construction.

pub mod backend;
pub mod chat;
pub mod gemini;
pub mod prompt;

pub use backend::GenerationBackend;
pub use chat::ChatCompletionsClient;
pub use gemini::GeminiClient;
pub use prompt::{GenerationRequest, MessageConvention, build_request};
