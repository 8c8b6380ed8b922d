use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::http::github_key_fetcher::{DEFAULT_HOST, DEFAULT_TIMEOUT};
use crate::core::errors::{KeylinkError, Result};

/// Top-level keylink configuration read from `config.toml`.
///
/// Every field is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub github: GithubSection,
    pub params: ParamsSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the per-user default
    /// location is tried and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(KeylinkError::InvalidConfig {
                    detail: format!("config file not found: {}", path.display()),
                });
            }
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/keylink/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("keylink").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|e| match e {
            KeylinkError::InvalidConfig { detail } => KeylinkError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| KeylinkError::InvalidConfig {
            detail: format!("failed to parse config: {e}"),
        })?;

        validate_host(&config.github.host)?;
        Ok(config)
    }

    /// Directory holding the persisted parameters.
    pub fn params_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.params.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("keylink").join("params"))
            .ok_or_else(|| KeylinkError::InvalidConfig {
                detail: "could not determine a data directory; pass --params-dir".into(),
            })
    }
}

/// Reject hosts that are not http(s) URLs.
pub fn validate_host(host: &str) -> Result<()> {
    if host.starts_with("https://") || host.starts_with("http://") {
        return Ok(());
    }
    Err(KeylinkError::InvalidConfig {
        detail: format!("host must be an http(s) URL, got '{host}'"),
    })
}

/// The `[github]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubSection {
    /// Base URL keys are fetched from.
    pub host: String,
    pub timeout_secs: u64,
}

impl Default for GithubSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// The `[params]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsSection {
    pub dir: Option<PathBuf>,
}
