//! Reveal command - release the secret behind an approved request.

use uuid::Uuid;

use crate::cli::open_vault;
use crate::core::domain::PlainSecret;
use crate::error::Result;

/// Reveal the secret. The plaintext goes to stdout and nowhere else, so it
/// can be piped without scraping decorations off.
pub fn execute(request_id: Uuid, member: &str) -> Result<()> {
    let (warden, _vault) = open_vault()?;

    match warden.reveal(request_id, member)? {
        PlainSecret::Stored(value) => {
            println!("{}", value.as_str());
        }
        PlainSecret::OneTime(code) => {
            println!("{}", code.code);
            eprintln!(
                "valid from {} until {}",
                code.valid_from, code.valid_until
            );
        }
    }
    Ok(())
}
