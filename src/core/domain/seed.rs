//! Envelope-encrypted TOTP seed material.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::constants;
use crate::core::types::SeedId;

/// An envelope-encrypted TOTP seed plus its derivation parameters.
///
/// `ciphertext` is `nonce‖ct‖tag` as produced by [`crate::core::codec`];
/// it is opaque to every other component and immutable once written
/// (rotation creates a new record). Hex-encoded in the state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedSeed {
    pub id: SeedId,
    /// Human-readable account label (e.g. "Facebook"). Also the input to
    /// the codec's key derivation, so renaming would orphan the ciphertext.
    pub label: String,
    #[serde(with = "hex")]
    pub ciphertext: Vec<u8>,
    pub epoch_start: i64,
    pub interval_secs: i64,
    pub digits: u32,
}

impl ProtectedSeed {
    /// Create a seed record with the default OTP parameters.
    pub fn new(label: String, ciphertext: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            ciphertext,
            epoch_start: constants::DEFAULT_EPOCH_START,
            interval_secs: constants::DEFAULT_INTERVAL_SECS,
            digits: constants::DEFAULT_DIGITS,
        }
    }
}
