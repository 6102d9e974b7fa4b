//! Vote command - record an approval or denial.

use uuid::Uuid;

use crate::cli::{open_vault, output};
use crate::error::Result;

/// Record the caller's vote on a request.
pub fn execute(request_id: Uuid, member: &str, approve: bool) -> Result<()> {
    let (warden, _vault) = open_vault()?;

    let status = warden.vote(request_id, member, approve)?;

    if approve {
        output::success("approval recorded");
    } else {
        output::success("denial recorded");
        output::dimmed("the request stays open; you can change your vote later");
    }

    if status.resolved {
        output::kv("state", "approved");
        output::hint(&format!("reveal with: warden reveal {}", request_id));
    } else {
        output::kv("outstanding", status.outstanding());
    }
    Ok(())
}
