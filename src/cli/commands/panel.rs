use std::io::{self, BufRead, Write};

use crate::cli::context::Context;
use crate::cli::output;
use crate::cli::session::LinkSession;
use crate::cli::terminal::TerminalFrontend;
use crate::core::errors::Result;
use crate::core::services::link_service::{LINK_WARNING, LinkService};

/// Execute the `keylink panel` command.
///
/// Renders the control and clicks it on every Enter until `q` or EOF.
pub fn execute(ctx: &Context) -> Result<()> {
    output::header("SSH Keys");
    println!("  {LINK_WARNING}\n");

    let service = LinkService::new(ctx.param_store())?;
    let mut session = LinkSession::new(service, ctx.fetcher()?, TerminalFrontend::panel())?;
    session.render()?;

    loop {
        print!("  [Enter] {}  [q] quit: ", session.service().view().action);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "q" | "quit" => break,
            "" => session.click()?,
            other => output::warning(&format!("Unknown input '{other}'")),
        }
    }

    Ok(())
}
