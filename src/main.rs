mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    init_logging(args.verbose);
    cli::output::set_quiet(args.quiet);

    let result = Context::resolve(&args).and_then(|ctx| match &args.command {
        Commands::Status { json } => cli::commands::status::execute(&ctx, *json),
        Commands::Link { username } => cli::commands::link::execute(&ctx, username.as_deref()),
        Commands::Unlink => cli::commands::unlink::execute(&ctx),
        Commands::AuthorizedKeys => cli::commands::authorized_keys::execute(&ctx),
        Commands::Panel => cli::commands::panel::execute(&ctx),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "keylink=debug" } else { "keylink=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
