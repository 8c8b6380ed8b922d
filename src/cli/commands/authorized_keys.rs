use std::io::Write;

use crate::cli::context::Context;
use crate::core::errors::Result;
use crate::core::services::link_service::LinkService;

/// Execute the `keylink authorized-keys` command.
///
/// Prints the stored blob verbatim, suitable for sshd's
/// `AuthorizedKeysCommand`. Prints nothing when unlinked.
pub fn execute(ctx: &Context) -> Result<()> {
    let service = LinkService::new(ctx.param_store())?;
    let Some(account) = service.account()? else {
        return Ok(());
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(account.keys.as_bytes())?;
    if !account.keys.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
