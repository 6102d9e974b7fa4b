//! Pending command - list unresolved disclosure requests.

use crate::cli::{open_vault, output};
use crate::error::Result;

/// List unresolved requests, oldest first.
pub fn execute() -> Result<()> {
    let (warden, _vault) = open_vault()?;
    let requests = warden.pending_requests()?;

    if requests.is_empty() {
        output::dimmed("no pending requests");
        return Ok(());
    }

    output::header(&format!("{} pending", requests.len()));
    for request in &requests {
        let status = warden.status(request.id)?;
        output::list_item(&format!(
            "{}  by {}  ({} outstanding)",
            output::id(request.id),
            request.requester,
            status.outstanding()
        ));
    }
    Ok(())
}
