//! Web Temple Core Library
//!
//! Request models, prompt construction, the completion client, and the
//! form state model for the business website design assistant.

pub mod analysis;
pub mod completion;
pub mod config;
pub mod error;
pub mod form;

pub use analysis::model::{AnalysisRequest, AnalysisResult};
pub use completion::CompletionClient;
pub use config::CompletionConfig;
pub use error::{TempleError, TempleResult};
