/// Result of one key fetch, as classified by the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request succeeded. The body may be empty.
    Success(String),
    /// The request did not complete within the client timeout.
    TimedOut,
    /// The host reported that the account does not exist.
    NotFound,
    /// Any other failure.
    Failed(String),
}
