//! Type aliases for domain concepts.
//!
//! Semantic aliases keep function signatures descriptive without the weight
//! of full newtypes.

use uuid::Uuid;

/// A vault member's identifier (their display name in the state file).
pub type MemberId = String;

/// Identifier of a vault (a group of members guarding one secret).
pub type VaultId = Uuid;

/// Identifier of a protected secret.
pub type SecretId = Uuid;

/// Identifier of an envelope-encrypted TOTP seed.
pub type SeedId = Uuid;

/// Identifier of a disclosure request.
pub type RequestId = Uuid;
