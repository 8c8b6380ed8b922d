use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::http::github_key_fetcher::GithubKeyFetcher;
use crate::adapters::params::file_param_store::FileParamStore;
use crate::cli::Cli;
use crate::config::app_config::{self, AppConfig};
use crate::core::errors::{KeylinkError, Result};

/// Settings every command runs with: the config file merged with
/// command-line overrides.
#[derive(Debug, Clone)]
pub struct Context {
    pub params_dir: PathBuf,
    pub host: String,
    pub timeout: Duration,
}

impl Context {
    /// Load the config file and apply the global flags on top of it.
    pub fn resolve(args: &Cli) -> Result<Self> {
        let config = AppConfig::load(args.config.as_deref())?;

        let params_dir = match &args.params_dir {
            Some(dir) => dir.clone(),
            None => config.params_dir()?,
        };
        let host = args
            .host
            .clone()
            .unwrap_or_else(|| config.github.host.clone());
        app_config::validate_host(&host)?;
        let timeout_secs = args.timeout.unwrap_or(config.github.timeout_secs);
        if timeout_secs == 0 {
            return Err(KeylinkError::InvalidConfig {
                detail: "timeout must be at least 1 second".into(),
            });
        }

        let ctx = Self {
            params_dir,
            host,
            timeout: Duration::from_secs(timeout_secs),
        };
        tracing::debug!(?ctx, "resolved context");
        Ok(ctx)
    }

    pub fn param_store(&self) -> FileParamStore {
        FileParamStore::new(self.params_dir.clone())
    }

    pub fn fetcher(&self) -> Result<GithubKeyFetcher> {
        GithubKeyFetcher::new(&self.host, self.timeout)
    }
}
