//! Configuration management.
//!
//! Settings come from an optional TOML file with environment-variable
//! fallbacks:
//!
//! ```toml
//! [arxiv]
//! api_url = "https://export.arxiv.org/api/query"
//! timeout_secs = 30
//! ```
//!
//! `ARXIV_MCP_API_URL` and `ARXIV_MCP_TIMEOUT_SECS` override the
//! defaults when no file value is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// arXiv API settings
    #[serde(default)]
    pub arxiv: ArxivConfig,
}

/// arXiv API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArxivConfig {
    /// Base URL of the arXiv query API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    std::env::var("ARXIV_MCP_API_URL")
        .unwrap_or_else(|_| crate::arxiv::ARXIV_API_URL.to_string())
}

fn default_timeout_secs() -> u64 {
    std::env::var("ARXIV_MCP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Find a config file in the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("arxiv-mcp.toml")];
    if let Ok(home) = std::env::var("HOME") {
        candidates.push(
            PathBuf::from(home)
                .join(".config")
                .join("arxiv-mcp")
                .join("config.toml"),
        );
    }
    candidates.into_iter().find(|p| p.exists())
}
