use crate::cli::context::Context;
use crate::cli::output;
use crate::cli::session::LinkSession;
use crate::cli::terminal::TerminalFrontend;
use crate::core::errors::{KeylinkError, Result};
use crate::core::models::link_state::LinkState;
use crate::core::services::link_service::{LINK_WARNING, LinkService};

/// Execute the `keylink link` command.
///
/// Clicks the control once while unlinked. With `username` the prompt is
/// answered up front; otherwise it is read from stdin.
pub fn execute(ctx: &Context, username: Option<&str>) -> Result<()> {
    let service = LinkService::new(ctx.param_store())?;
    if let LinkState::Linked { username } = service.state() {
        return Err(KeylinkError::AlreadyLinked {
            username: username.clone(),
        });
    }

    if username.is_none() {
        output::warning(LINK_WARNING);
    }

    let frontend = TerminalFrontend::oneshot(username.map(str::to_string));
    let mut session = LinkSession::new(service, ctx.fetcher()?, frontend)?;
    session.click()?;

    if session.last_alert().is_some() {
        return Err(KeylinkError::NotLinked);
    }

    match session.service().account()? {
        Some(account) => {
            output::success(&format!(
                "Linked {} ({} keys)",
                account.username,
                account.key_lines().len()
            ));
            Ok(())
        }
        None => {
            output::warning("No username entered, nothing linked.");
            Ok(())
        }
    }
}
