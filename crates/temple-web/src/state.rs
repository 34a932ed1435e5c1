//! Application state.

use std::sync::Arc;

use temple_core::CompletionClient;

/// Application state shared across handlers.
///
/// The completion client is built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}
