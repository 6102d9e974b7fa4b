//! Secret enrollment commands.

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::cli::{open_vault, output};
use crate::core::domain::SecretPayload;
use crate::error::Result;

/// Store a plaintext-equivalent secret. Prompts if no value was given so
/// the secret stays out of shell history.
pub fn set(value: Option<String>) -> Result<()> {
    let (warden, vault) = open_vault()?;

    let value = Zeroizing::new(match value {
        Some(v) => v,
        None => Password::new().with_prompt("Secret value").interact()?,
    });

    if warden.secret_for_vault(vault.id)?.is_some() {
        output::warn("replacing the vault's protected secret");
    }

    let secret = warden.set_stored_secret(vault.id, &value)?;
    output::success("secret stored");
    output::kv("id", output::id(secret.id));
    Ok(())
}

/// Enroll a TOTP seed. The seed is sealed under a label-derived key before
/// it touches disk.
pub fn totp(label: &str, seed: &str, epoch: i64, interval: i64, digits: u32) -> Result<()> {
    let (warden, vault) = open_vault()?;

    let (sealed, secret) = warden.enroll_seed(
        vault.id,
        label,
        seed.as_bytes(),
        epoch,
        interval,
        digits,
    )?;

    output::success(&format!("totp seed enrolled for {}", label));
    output::kv("secret", output::id(secret.id));
    output::kv("interval", format!("{}s", sealed.interval_secs));
    output::kv("digits", sealed.digits);
    Ok(())
}

/// Show what the vault protects. Never prints plaintext or seed material.
pub fn show() -> Result<()> {
    let (warden, vault) = open_vault()?;

    let Some(secret) = warden.secret_for_vault(vault.id)? else {
        output::dimmed("nothing protected yet");
        output::hint("enroll with: warden secret set | warden secret totp <label> <seed>");
        return Ok(());
    };

    output::header("Protected secret");
    output::kv("id", output::id(secret.id));
    match secret.payload {
        SecretPayload::Stored { .. } => {
            output::kv("kind", "stored value");
        }
        SecretPayload::Totp { seed_id } => {
            output::kv("kind", "totp");
            if let Some(seed) = warden.seed(seed_id)? {
                output::kv("label", &seed.label);
                output::kv("interval", format!("{}s", seed.interval_secs));
                output::kv("digits", seed.digits);
            }
        }
    }
    Ok(())
}
