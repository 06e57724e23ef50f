//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use sparkgen::{AppConfig, CliOverrides, LogFormat, SparkgenResult};
use std::path::PathBuf;

/// Generate PySpark DataFrame code from natural-language instructions.
#[derive(Parser)]
#[command(name = "sparkgen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Anthropic API key
    #[arg(long, global = true, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model identifier (overrides config)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Maximum tokens to generate (overrides config)
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Messages API base URL (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, 0 for none (overrides config)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log output format: human or json
    #[arg(long, global = true, default_value = "human")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Resolves the configuration file and applies flag overrides.
    pub fn app_config(&self) -> SparkgenResult<AppConfig> {
        AppConfig::load(self.config.as_deref())?.with_overrides(CliOverrides {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate code once and print it
    Generate {
        /// Instructions; read from stdin when omitted or "-"
        instructions: Option<String>,
    },

    /// Prompt for instructions repeatedly until :quit or end of input
    Interactive,

    /// Print the system prompt sent with every request
    Prompt,
}
