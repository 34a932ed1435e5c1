//! Web server command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use temple_core::config::{CompletionConfig, API_KEY_ENV};
use temple_web::ServerConfig;
use tracing::warn;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Allowed CORS origin (repeatable; any origin when omitted)
    #[arg(long)]
    pub cors_origin: Vec<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./temple-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: CompletionConfig) -> Result<()> {
    if !config.has_api_key() {
        warn!("{} is not set; every analysis will fail until it is", API_KEY_ENV);
    }
    let client = config.build_client()?;

    println!();
    println!("  {} {}", "Web Temple".cyan().bold(), "Server".bold());
    println!();
    println!("  {}      http://{}:{}", "Form".green(), args.host, args.port);
    println!("  {}       http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}     {}", "Model".green(), config.model);
    if !config.has_api_key() {
        println!("  {}", format!("{} not set", API_KEY_ENV).yellow());
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    temple_web::run_server(
        client,
        ServerConfig {
            host: args.host,
            port: args.port,
            cors_origins: args.cors_origin,
        },
    )
    .await?;

    Ok(())
}
