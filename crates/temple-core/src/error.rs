//! Centralized error types for Web Temple.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum TempleError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Completion service credential is not configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("Failed to reach completion service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion service error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Completion service returned no choices")]
    EmptyCompletion,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Web Temple operations.
pub type TempleResult<T> = Result<T, TempleError>;

impl TempleError {
    /// Create an upstream error from a non-success HTTP status.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Short machine-readable label, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::MissingApiKey => "missing_api_key",
            Self::Transport(_) => "upstream_transport",
            Self::Upstream { .. } => "upstream_error",
            Self::EmptyCompletion => "upstream_empty",
            Self::Config(_) => "config",
        }
    }
}
