//! Client configuration.
//!
//! Settings are passed explicitly or loaded from a TOML file; nothing is read
//! from the process environment.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default host for the extraction, crawl, search and account endpoints
pub const DEFAULT_API_BASE: &str = "https://api.diffbot.com";

/// Default host for the Knowledge Graph endpoint
pub const DEFAULT_KG_BASE: &str = "https://kg.diffbot.com";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Field value cannot be used as given
    #[error("Invalid configuration field: {0}")]
    InvalidField(String),
}

/// Characters that would end or split the `token` query parameter
const TOKEN_DELIMITERS: [char; 4] = ['&', '#', '?', '='];

/// Client configuration
///
/// ```toml
/// token = "0123456789abcdef"
/// test_mode = false
/// api_base = "https://api.diffbot.com"
/// kg_base = "https://kg.diffbot.com"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API token appended to every request
    pub token: String,

    /// Return request descriptors instead of performing I/O
    #[serde(default)]
    pub test_mode: bool,

    /// Scheme and host of the main API, without a trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Scheme and host of the Knowledge Graph API, without a trailing slash
    #[serde(default = "default_kg_base")]
    pub kg_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_kg_base() -> String {
    DEFAULT_KG_BASE.to_string()
}

impl ClientConfig {
    /// Configuration for `token` against the public service
    ///
    /// Surrounding whitespace is trimmed from the token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into().trim().to_string(),
            test_mode: false,
            api_base: default_api_base(),
            kg_base: default_kg_base(),
        }
    }

    /// Enable or disable test mode
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Point the main API at another host (a proxy or a mock server)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Point the Knowledge Graph API at another host
    pub fn with_kg_base(mut self, kg_base: impl Into<String>) -> Self {
        self.kg_base = kg_base.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.is_empty() {
            return Err(ConfigError::MissingField("token".to_string()));
        }
        if self
            .token
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || TOKEN_DELIMITERS.contains(&c))
        {
            return Err(ConfigError::InvalidField("token".to_string()));
        }
        if self.api_base.is_empty() {
            return Err(ConfigError::MissingField("api_base".to_string()));
        }
        if self.kg_base.is_empty() {
            return Err(ConfigError::MissingField("kg_base".to_string()));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: ClientConfig = toml::from_str(toml_str)?;
        config.token = config.token.trim().to_string();
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        config.kg_base = config.kg_base.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
