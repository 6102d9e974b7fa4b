//! Request command - open a disclosure request.

use crate::cli::{open_vault, output};
use crate::error::Result;

/// Ask to reveal the vault's secret. The caller's own approval is recorded
/// up front; everyone else starts undecided.
pub fn execute(member: &str) -> Result<()> {
    let (warden, vault) = open_vault()?;

    let Some(secret) = warden.secret_for_vault(vault.id)? else {
        output::warn("nothing protected yet, no request opened");
        output::hint("enroll with: warden secret set | warden secret totp <label> <seed>");
        return Ok(());
    };

    let status = warden.request_disclosure(secret.id, member)?;

    output::success("disclosure request opened");
    output::kv("request", output::id(status.request_id));
    if status.resolved {
        output::kv("state", "approved");
        output::hint(&format!("reveal with: warden reveal {}", status.request_id));
    } else {
        let waiting: Vec<&str> = status.waiting_on().iter().map(|m| m.as_str()).collect();
        if waiting.is_empty() {
            // single-member vault: the pre-approval alone does not resolve
            output::hint(&format!("confirm with: warden vote {}", status.request_id));
        } else {
            output::kv("waiting on", waiting.join(", "));
        }
    }
    Ok(())
}
