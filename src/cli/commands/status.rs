use serde::Serialize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::linked_account::PublicKeyLine;
use crate::core::services::link_service::LinkService;

#[derive(Serialize)]
struct StatusReport {
    linked: bool,
    username: Option<String>,
    keys: Vec<PublicKeyLine>,
}

/// Execute the `keylink status` command.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let store = ctx.param_store();
    let params_dir = store.dir().to_path_buf();
    let service = LinkService::new(store)?;
    let account = service.account()?;

    if json {
        let report = StatusReport {
            linked: account.is_some(),
            keys: account.as_ref().map(|a| a.key_lines()).unwrap_or_default(),
            username: account.map(|a| a.username),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(account) = account else {
        output::warning("No account linked.");
        println!("  Run 'keylink link <username>' to add one.");
        return Ok(());
    };

    let keys = account.key_lines();
    output::header(&format!("Linked account: {}", account.username));
    println!("  Params: {}", params_dir.display());
    println!("  Keys ({}):", keys.len());
    for key in &keys {
        println!("  • {key}");
    }

    Ok(())
}
