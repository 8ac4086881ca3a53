//! Daemon entry point for the JUCE documentation MCP server.
//!
//! Loads configuration from the command line and environment, installs
//! logging on stderr, and serves the MCP protocol over stdio or streamable
//! HTTP.

mod config;

use std::process::ExitCode;

use juce_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{JuceConfig, Transport};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match JuceConfig::from_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Server error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing(&config.log_filter) {
        eprintln!("Server error: {err}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Server error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries the stdio transport.
fn init_tracing(filter: &str) -> Result<(), BoxError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()?;
    Ok(())
}

async fn run(config: JuceConfig) -> Result<(), BoxError> {
    info!(transport = ?config.transport, "starting juce-mcpd");
    match config.transport {
        Transport::Stdio => serve_stdio().await,
        Transport::Http => serve_streamable_http(config.http).await,
    }
}
