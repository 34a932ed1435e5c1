//! CLI command definitions and handlers.

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use temple_core::config::{CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub mod analyze;
pub mod serve;

/// Web Temple - Business Website Design Assistant
#[derive(Parser)]
#[command(name = "temple")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub completion: CompletionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Completion service settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CompletionArgs {
    /// Completion service API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Chat model used for both prompts
    #[arg(long, env = "TEMPLE_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-call timeout in seconds (no timeout when unset)
    #[arg(long, env = "TEMPLE_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

impl CompletionArgs {
    pub fn to_config(&self) -> CompletionConfig {
        CompletionConfig {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..CompletionConfig::default()
        }
        .with_api_key(self.api_key.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a business from the terminal
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.completion.to_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Analyze(args) => analyze::execute(args, config).await,
        }
    }
}
