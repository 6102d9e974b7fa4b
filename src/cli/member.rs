//! Member management commands.

use crate::cli::{open_vault, output};
use crate::error::Result;

/// Add a member to the vault.
pub fn add(name: &str) -> Result<()> {
    let (warden, vault) = open_vault()?;
    warden.add_member(vault.id, name)?;
    output::success(&format!("{} added to vault", name));
    output::dimmed("open requests keep their original electorate");
    Ok(())
}

/// Remove a member from the vault.
pub fn rm(name: &str) -> Result<()> {
    let (warden, vault) = open_vault()?;
    warden.remove_member(vault.id, name)?;
    output::success(&format!("{} removed from vault", name));
    Ok(())
}

/// List vault members.
pub fn list(json: bool) -> Result<()> {
    let (warden, vault) = open_vault()?;
    let members = warden.members(vault.id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&members)?);
        return Ok(());
    }

    if members.is_empty() {
        output::dimmed("no members");
    } else {
        output::header(&format!("{} members", members.len()));
        for member in &members {
            output::list_item(member);
        }
    }
    Ok(())
}
