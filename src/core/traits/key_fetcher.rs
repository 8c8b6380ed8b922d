use std::future::Future;

use crate::core::models::fetch_outcome::FetchOutcome;

/// Port for retrieving an account's published public keys.
pub trait KeyFetcher {
    /// URL the keys of `username` are fetched from.
    fn keys_url(&self, username: &str) -> String;

    /// Issue one GET for `username`'s keys.
    ///
    /// Never errors: every failure is classified into the outcome.
    fn fetch(&self, username: &str) -> impl Future<Output = FetchOutcome> + Send;
}
