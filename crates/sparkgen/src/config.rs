//! Application configuration loaded from TOML with command-line overrides.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use sparkgen_core::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, GenerationSettings};
use sparkgen_error::{ConfigError, SparkgenResult};
use sparkgen_models::{AnthropicConfig, DEFAULT_API_VERSION, DEFAULT_ENDPOINT};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// File name looked up inside the user's config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for the `sparkgen` binary.
///
/// ```toml
/// model = "claude-sonnet-4-20250514"
/// max_tokens = 2000
/// endpoint = "https://api.anthropic.com"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Model identifier
    model: String,
    /// Output cap per generation
    max_tokens: u32,
    /// Messages API base URL
    endpoint: String,
    /// `anthropic-version` header value
    api_version: String,
    /// Whole-request timeout in seconds; 0 disables it
    timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    120
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--model`
    pub model: Option<String>,
    /// `--max-tokens`
    pub max_tokens: Option<u32>,
    /// `--endpoint`
    pub endpoint: Option<String>,
    /// `--timeout-secs`
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SparkgenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!(?config, "Configuration file loaded");
        Ok(config)
    }

    /// Default location: `<config dir>/sparkgen/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sparkgen").join(CONFIG_FILE_NAME))
    }

    /// Loads `explicit` if given (it must exist), otherwise the default path
    /// when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> SparkgenResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                info!(path = %path.display(), "Using default config file");
                Self::from_file(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line values on top of this configuration.
    pub fn with_overrides(mut self, overrides: CliOverrides) -> SparkgenResult<Self> {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects values that cannot produce a working client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::new("max_tokens must be greater than zero"));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        Ok(())
    }

    /// Request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Client configuration for the Anthropic driver.
    pub fn anthropic_config(&self) -> SparkgenResult<AnthropicConfig> {
        let config = AnthropicConfig::builder()
            .endpoint(self.endpoint.clone())
            .model(self.model.clone())
            .api_version(self.api_version.clone())
            .timeout(self.timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid client configuration: {}", e)))?;
        Ok(config)
    }

    /// Per-request settings for the handler.
    pub fn generation_settings(&self) -> SparkgenResult<GenerationSettings> {
        let settings = GenerationSettings::builder()
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid generation settings: {}", e)))?;
        Ok(settings)
    }
}
