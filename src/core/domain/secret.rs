//! Protected secrets.
//!
//! A `ProtectedSecret` is what a vault guards: either a stored
//! plaintext-equivalent value or a reference to an envelope-encrypted TOTP
//! seed. Revealing either is gated by the quorum state machine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::core::codec::otp::OneTimeCode;
use crate::core::types::{SecretId, SeedId, VaultId};

/// The payload behind a protected secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SecretPayload {
    /// A directly stored secret value (API key, password).
    Stored { value: String },
    /// A TOTP-backed secret; reveal decrypts the seed and derives a code.
    Totp { seed_id: SeedId },
}

/// A secret guarded by a vault's quorum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedSecret {
    pub id: SecretId,
    pub vault_id: VaultId,
    pub payload: SecretPayload,
}

impl ProtectedSecret {
    pub fn new(vault_id: VaultId, payload: SecretPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            vault_id,
            payload,
        }
    }
}

/// The released form of a secret, returned only after quorum.
///
/// Stored values come back in `Zeroizing` so the plaintext is wiped when the
/// caller drops it. Never logged, never persisted.
pub enum PlainSecret {
    Stored(Zeroizing<String>),
    OneTime(OneTimeCode),
}

impl std::fmt::Debug for PlainSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Redacted: the plaintext must not reach logs through Debug.
        match self {
            Self::Stored(_) => f.write_str("PlainSecret::Stored(<redacted>)"),
            Self::OneTime(_) => f.write_str("PlainSecret::OneTime(<redacted>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_tagged_serialization() {
        let secret = ProtectedSecret::new(
            Uuid::new_v4(),
            SecretPayload::Stored {
                value: "hunter2".to_string(),
            },
        );
        let toml = toml::to_string(&secret).unwrap();
        assert!(toml.contains("kind = \"stored\""));

        let totp = ProtectedSecret::new(Uuid::new_v4(), SecretPayload::Totp { seed_id: Uuid::new_v4() });
        let toml = toml::to_string(&totp).unwrap();
        assert!(toml.contains("kind = \"totp\""));
    }

    #[test]
    fn test_plain_secret_debug_is_redacted() {
        let plain = PlainSecret::Stored(Zeroizing::new("hunter2".to_string()));
        let debug = format!("{:?}", plain);
        assert!(!debug.contains("hunter2"));
    }
}
