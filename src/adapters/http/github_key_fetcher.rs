use std::future::Future;
use std::time::Duration;

use crate::core::errors::{KeylinkError, Result};
use crate::core::models::fetch_outcome::FetchOutcome;
use crate::core::traits::key_fetcher::KeyFetcher;

/// Host queried when none is configured.
pub const DEFAULT_HOST: &str = "https://github.com";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetches `https://<host>/<username>.keys`, the plain-text list of an
/// account's public SSH keys.
#[derive(Clone)]
pub struct GithubKeyFetcher {
    client: reqwest::Client,
    host: String,
}

impl GithubKeyFetcher {
    /// Build a fetcher for `host` with the given request timeout.
    pub fn new(host: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("keylink/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KeylinkError::HttpClient {
                reason: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }
}

impl KeyFetcher for GithubKeyFetcher {
    fn keys_url(&self, username: &str) -> String {
        format!("{}/{username}.keys", self.host)
    }

    fn fetch(&self, username: &str) -> impl Future<Output = FetchOutcome> + Send {
        let url = self.keys_url(username);
        let client = self.client.clone();

        async move {
            tracing::debug!(%url, "GET");
            let resp = match client.get(&url).send().await {
                Ok(resp) => resp,
                Err(e) => return classify_error(&e),
            };

            let status = resp.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return FetchOutcome::NotFound;
            }
            if !status.is_success() {
                return FetchOutcome::Failed(format!("{url} returned status {status}"));
            }

            match resp.text().await {
                Ok(body) => FetchOutcome::Success(body),
                Err(e) => classify_error(&e),
            }
        }
    }
}

fn classify_error(e: &reqwest::Error) -> FetchOutcome {
    tracing::debug!(error = %e, "key fetch failed");
    if e.is_timeout() {
        FetchOutcome::TimedOut
    } else {
        FetchOutcome::Failed(e.to_string())
    }
}
