//! Init command - create the vault and its state file.

use tracing::info;

use crate::cli::output;
use crate::core::store::FileStore;
use crate::core::{constants, validation, Warden};
use crate::error::{Result, ValidationError};

/// Initialize a vault in the current directory with the caller as founder.
pub fn execute(name: Option<String>, description: Option<String>, member: &str) -> Result<()> {
    let name = name.unwrap_or_else(|| "vault".to_string());
    let description = description.unwrap_or_default();

    // Validate everything before touching the filesystem, so a failed init
    // leaves no half-initialized state file behind.
    validation::validate_member_name(member)?;
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    info!(vault = %name, founder = %member, "initializing");

    let warden = Warden::new(FileStore::init()?);
    let vault = warden.create_vault(&name, &description, member)?;

    output::success(&format!("initialized {}", constants::STATE_FILE));
    output::kv("vault", &vault.name);
    output::kv("founder", member);
    output::hint("add teammates with: warden member add <name>");
    Ok(())
}
