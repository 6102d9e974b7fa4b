//! Status command - inspect one request's approval state.

use uuid::Uuid;

use crate::cli::{open_vault, output};
use crate::error::Result;

/// Show the approval state of a request.
pub fn execute(request_id: Uuid, json: bool) -> Result<()> {
    let (warden, _vault) = open_vault()?;
    let status = warden.status(request_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    output::header(&format!("Request {}", status.request_id));
    output::kv("state", if status.resolved { "approved" } else { "pending" });
    for (member, approved) in &status.approvals {
        let mark = if *approved { "✓" } else { "·" };
        output::list_item(&format!("{} {}", mark, member));
    }
    if status.resolved {
        output::hint(&format!("reveal with: warden reveal {}", request_id));
    }
    Ok(())
}
