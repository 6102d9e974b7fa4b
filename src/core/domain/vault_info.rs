//! Vault metadata.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{MemberId, VaultId};

/// A vault: a named group of members guarding one protected secret.
///
/// `shares_n`/`threshold_k` are carried as opaque metadata. No secret
/// splitting is performed with them; the release rule is unanimity over
/// `members` (see [`crate::core::quorum`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultInfo {
    pub id: VaultId,
    pub name: String,
    pub description: String,
    pub members: BTreeSet<MemberId>,
    pub shares_n: u32,
    pub threshold_k: u32,
}

impl VaultInfo {
    /// Create a vault with a single founding member.
    pub fn new(name: String, description: String, founder: MemberId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            members: BTreeSet::from([founder]),
            shares_n: 1,
            threshold_k: 1,
        }
    }

    pub fn is_member(&self, member: &str) -> bool {
        self.members.contains(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founder_is_member() {
        let vault = VaultInfo::new("prod".into(), "production creds".into(), "alice".into());
        assert!(vault.is_member("alice"));
        assert!(!vault.is_member("mallory"));
        assert_eq!(vault.shares_n, 1);
        assert_eq!(vault.threshold_k, 1);
    }
}
