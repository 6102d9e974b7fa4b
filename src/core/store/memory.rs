//! In-memory store backend.
//!
//! Holds the full entity state in maps. Doubles as the deserialized form of
//! the `.warden.toml` state file (see [`super::FileStore`]).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Membership, Store};
use crate::core::domain::{
    ApprovalVote, DisclosureRequest, ProtectedSecret, ProtectedSeed, VaultInfo,
};
use crate::core::types::{MemberId, RequestId, SecretId, SeedId, VaultId};
use crate::error::Result;

/// All persisted entities, keyed by id.
///
/// Requests and votes are append-only (audit trail): rows are updated in
/// place but never removed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    pub(super) vaults: BTreeMap<Uuid, VaultInfo>,
    #[serde(default)]
    pub(super) secrets: BTreeMap<Uuid, ProtectedSecret>,
    #[serde(default)]
    pub(super) seeds: BTreeMap<Uuid, ProtectedSeed>,
    #[serde(default)]
    pub(super) requests: BTreeMap<Uuid, DisclosureRequest>,
    #[serde(default)]
    pub(super) votes: Vec<ApprovalVote>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn insert_vault(&mut self, vault: VaultInfo) -> Result<()> {
        self.vaults.insert(vault.id, vault);
        Ok(())
    }

    fn vault(&self, id: VaultId) -> Result<Option<VaultInfo>> {
        Ok(self.vaults.get(&id).cloned())
    }

    fn vaults(&self) -> Result<Vec<VaultInfo>> {
        Ok(self.vaults.values().cloned().collect())
    }

    fn update_vault(&mut self, vault: VaultInfo) -> Result<()> {
        self.vaults.insert(vault.id, vault);
        Ok(())
    }

    fn insert_secret(&mut self, secret: ProtectedSecret) -> Result<()> {
        self.secrets.insert(secret.id, secret);
        Ok(())
    }

    fn secret(&self, id: SecretId) -> Result<Option<ProtectedSecret>> {
        Ok(self.secrets.get(&id).cloned())
    }

    fn secret_for_vault(&self, vault_id: VaultId) -> Result<Option<ProtectedSecret>> {
        Ok(self
            .secrets
            .values()
            .find(|s| s.vault_id == vault_id)
            .cloned())
    }

    fn remove_secret(&mut self, id: SecretId) -> Result<()> {
        self.secrets.remove(&id);
        Ok(())
    }

    fn insert_seed(&mut self, seed: ProtectedSeed) -> Result<()> {
        self.seeds.insert(seed.id, seed);
        Ok(())
    }

    fn seed(&self, id: SeedId) -> Result<Option<ProtectedSeed>> {
        Ok(self.seeds.get(&id).cloned())
    }

    fn remove_seed(&mut self, id: SeedId) -> Result<()> {
        self.seeds.remove(&id);
        Ok(())
    }

    fn insert_request(&mut self, request: DisclosureRequest) -> Result<()> {
        self.requests.insert(request.id, request);
        Ok(())
    }

    fn request(&self, id: RequestId) -> Result<Option<DisclosureRequest>> {
        Ok(self.requests.get(&id).cloned())
    }

    fn resolve_request(&mut self, id: RequestId) -> Result<()> {
        if let Some(request) = self.requests.get_mut(&id) {
            request.resolved = true;
        }
        Ok(())
    }

    fn unresolved_requests(&self) -> Result<Vec<DisclosureRequest>> {
        Ok(self
            .requests
            .values()
            .filter(|r| !r.resolved)
            .cloned()
            .collect())
    }

    fn insert_vote(&mut self, vote: ApprovalVote) -> Result<()> {
        self.votes.push(vote);
        Ok(())
    }

    fn votes_for(&self, request_id: RequestId) -> Result<Vec<ApprovalVote>> {
        Ok(self
            .votes
            .iter()
            .filter(|v| v.request_id == request_id)
            .cloned()
            .collect())
    }

    fn set_vote(&mut self, request_id: RequestId, member: &str, approved: bool) -> Result<bool> {
        for vote in &mut self.votes {
            if vote.request_id == request_id && vote.member == member {
                vote.approved = approved;
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Membership for MemoryStore {
    fn members_of(&self, vault_id: VaultId) -> Result<BTreeSet<MemberId>> {
        Ok(self
            .vaults
            .get(&vault_id)
            .map(|v| v.members.clone())
            .unwrap_or_default())
    }
}
