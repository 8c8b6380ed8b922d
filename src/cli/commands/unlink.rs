use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::link_state::LinkState;
use crate::core::services::link_service::{LinkEvent, LinkService};

/// Execute the `keylink unlink` command.
///
/// Unlinking never fetches, so the click goes straight to the service
/// without a session, HTTP client or runtime.
pub fn execute(ctx: &Context) -> Result<()> {
    let mut service = LinkService::new(ctx.param_store())?;
    let LinkState::Linked { username } = service.state().clone() else {
        output::warning("No account linked.");
        return Ok(());
    };

    service.handle(LinkEvent::Clicked)?;

    output::success(&format!("Unlinked {username}"));
    println!("\n  Its keys no longer grant SSH access to this device.");
    Ok(())
}
