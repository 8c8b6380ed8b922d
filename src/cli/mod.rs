pub mod commands;
pub mod context;
pub mod output;
pub mod session;
pub mod terminal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Link a GitHub account and authorize its public SSH keys on this device.
#[derive(Parser, Debug)]
#[command(name = "keylink", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the persisted parameters
    #[arg(long, global = true, env = "KEYLINK_PARAMS_DIR")]
    pub params_dir: Option<PathBuf>,

    /// Host serving `<username>.keys` (default: https://github.com)
    #[arg(long, global = true, env = "KEYLINK_HOST")]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the linked account and its keys
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Link an account and store its public keys
    Link {
        /// Account to link (prompted for when omitted)
        username: Option<String>,
    },

    /// Forget the linked account and its keys
    Unlink,

    /// Print the stored keys in authorized_keys format
    AuthorizedKeys,

    /// Interactive control: Enter toggles, q quits
    Panel,
}
