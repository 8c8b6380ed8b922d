use std::path::PathBuf;

/// All domain errors for keylink.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum KeylinkError {
    #[error(
        "Could not read parameter '{key}' from {path}\n\n  \
         Check that the params directory is readable.\n  \
         Run 'keylink status --verbose' to see which directory is in use."
    )]
    ParamRead { key: String, path: PathBuf },

    #[error(
        "Could not write parameter '{key}' to {path}: {reason}\n\n  \
         Check that the params directory exists and is writable.\n  \
         Use --params-dir to point keylink at another location."
    )]
    ParamWrite {
        key: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid parameter name '{key}': only letters, digits and '_' are allowed")]
    InvalidParamKey { key: String },

    #[error(
        "Account '{username}' is already linked\n\n  \
         Unlink it first: keylink unlink"
    )]
    AlreadyLinked { username: String },

    #[error(
        "Account was not linked\n\n  \
         Check the username and try again: keylink link <username>"
    )]
    NotLinked,

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("HTTP client error: {reason}")]
    HttpClient { reason: String },

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeylinkError>;
