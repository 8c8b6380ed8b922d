use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::core::models::fetch_outcome::FetchOutcome;
use crate::core::traits::key_fetcher::KeyFetcher;

/// Owned handle to one in-flight key fetch.
///
/// The request is released when its outcome is taken with [`FetchTask::wait`].
/// Dropping the handle before that aborts the request.
pub struct FetchTask {
    username: String,
    handle: Option<JoinHandle<FetchOutcome>>,
}

impl FetchTask {
    /// Start fetching `username`'s keys on `runtime`.
    pub fn spawn<F>(runtime: &Runtime, fetcher: &F, username: &str) -> Self
    where
        F: KeyFetcher + Clone + Send + Sync + 'static,
    {
        let fetcher = fetcher.clone();
        let name = username.to_string();
        let handle = runtime.spawn(async move { fetcher.fetch(&name).await });

        Self {
            username: username.to_string(),
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Block until the fetch completes and release the handle.
    pub fn wait(mut self, runtime: &Runtime) -> FetchOutcome {
        let Some(handle) = self.handle.take() else {
            return FetchOutcome::Failed("fetch already released".into());
        };
        match runtime.block_on(handle) {
            Ok(outcome) => {
                tracing::debug!(username = %self.username, ?outcome, "fetch finished");
                outcome
            }
            Err(e) => FetchOutcome::Failed(format!("fetch task ended abnormally: {e}")),
        }
    }

    /// Abort the fetch without waiting for it.
    #[cfg(test)]
    pub fn cancel(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!(username = %self.username, "fetch aborted");
            handle.abort();
        }
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.abort();
    }
}
