//! Text completion service abstraction.
//!
//! The analysis pipeline only needs "prompt in, text out". The trait is the
//! seam where the OpenAI client is swapped for a fake in tests.

pub mod openai;

use async_trait::async_trait;

use crate::error::TempleResult;

pub use openai::OpenAiClient;

/// A service that turns one user prompt into model-generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as a single user message and return the first choice's text.
    async fn complete(&self, prompt: &str) -> TempleResult<String>;
}
