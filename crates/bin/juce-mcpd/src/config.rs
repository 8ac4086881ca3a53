use clap::{Parser, ValueEnum, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use juce_mcp::server::{DEFAULT_HTTP_ADDR, McpHttpServerConfig};

const DEFAULT_LOG_FILTER: &str = "info";

/// Transport the daemon serves MCP over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "juce-mcpd", version, about = "JUCE documentation MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "JUCE_MCP_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    #[arg(long, env = "JUCE_MCP_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long,
        env = "JUCE_MCP_STATELESS",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    stateless: bool,

    #[arg(long, env = "JUCE_MCP_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct JuceConfig {
    pub transport: Transport,
    pub http: McpHttpServerConfig,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl JuceConfig {
    /// Parses CLI arguments (with environment fallbacks) and validates them.
    ///
    /// # Errors
    /// Returns `ConfigError` if a setting is out of range.
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for JuceConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let log_filter = args.log_filter.trim().to_string();
        if log_filter.is_empty() || EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "JUCE_MCP_LOG",
                value: args.log_filter,
            });
        }

        if args.transport == Transport::Http && args.http_addr.port() == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "JUCE_MCP_HTTP_ADDR",
                value: args.http_addr.to_string(),
            });
        }

        let http = McpHttpServerConfig::new(args.http_addr).with_stateful_mode(!args.stateless);

        Ok(Self {
            transport: args.transport,
            http,
            log_filter,
        })
    }
}
