//! Completion service configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::completion::{CompletionClient, OpenAiClient};
use crate::error::TempleResult;

/// Default OpenAI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Environment variable holding the completion service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings for the completion service client.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// No timeout is applied when `None`.
    pub timeout: Option<Duration>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl CompletionConfig {
    /// Set the credential. Blank keys are treated as absent.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Whether a credential is present. Absence is only reported, never fatal.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the shared completion client.
    pub fn build_client(&self) -> TempleResult<Arc<dyn CompletionClient>> {
        Ok(Arc::new(OpenAiClient::new(self)?))
    }
}
