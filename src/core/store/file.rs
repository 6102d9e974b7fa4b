//! File-backed store.
//!
//! Persists the full entity state to `.warden.toml` in the working
//! directory. State is loaded once on open; every mutation writes the whole
//! file back, so a crash between calls never leaves a half-applied change
//! on disk.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::debug;

use super::{Membership, MemoryStore, Store};
use crate::core::constants;
use crate::core::domain::{
    ApprovalVote, DisclosureRequest, ProtectedSecret, ProtectedSeed, VaultInfo,
};
use crate::core::types::{MemberId, RequestId, SecretId, SeedId, VaultId};
use crate::error::{ConfigError, Result, StoreError};

/// Store backend persisting to `.warden.toml`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: MemoryStore,
}

impl FileStore {
    /// Path to the state file in the current directory.
    pub fn state_path() -> PathBuf {
        PathBuf::from(constants::STATE_FILE)
    }

    /// Check whether a state file exists in the current directory.
    pub fn exists() -> bool {
        Self::state_path().exists()
    }

    /// Create a fresh state file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if one already exists.
    pub fn init() -> Result<Self> {
        if Self::exists() {
            return Err(ConfigError::AlreadyInitialized.into());
        }
        let store = Self {
            path: Self::state_path(),
            state: MemoryStore::new(),
        };
        store.save()?;
        Ok(store)
    }

    /// Open an existing state file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if no state file exists, or
    /// `StoreError::Parse` if it is malformed.
    pub fn open() -> Result<Self> {
        let path = Self::state_path();
        debug!(path = %path.display(), "loading state");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(StoreError::ReadFailed)?;
        let state: MemoryStore = toml::from_str(&contents).map_err(StoreError::Parse)?;

        debug!(
            vaults = state.vaults.len(),
            secrets = state.secrets.len(),
            requests = state.requests.len(),
            "state loaded"
        );

        Ok(Self { path, state })
    }

    fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(&self.state).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, contents).map_err(StoreError::WriteFailed)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn insert_vault(&mut self, vault: VaultInfo) -> Result<()> {
        self.state.insert_vault(vault)?;
        self.save()
    }

    fn vault(&self, id: VaultId) -> Result<Option<VaultInfo>> {
        self.state.vault(id)
    }

    fn vaults(&self) -> Result<Vec<VaultInfo>> {
        self.state.vaults()
    }

    fn update_vault(&mut self, vault: VaultInfo) -> Result<()> {
        self.state.update_vault(vault)?;
        self.save()
    }

    fn insert_secret(&mut self, secret: ProtectedSecret) -> Result<()> {
        self.state.insert_secret(secret)?;
        self.save()
    }

    fn secret(&self, id: SecretId) -> Result<Option<ProtectedSecret>> {
        self.state.secret(id)
    }

    fn secret_for_vault(&self, vault_id: VaultId) -> Result<Option<ProtectedSecret>> {
        self.state.secret_for_vault(vault_id)
    }

    fn remove_secret(&mut self, id: SecretId) -> Result<()> {
        self.state.remove_secret(id)?;
        self.save()
    }

    fn insert_seed(&mut self, seed: ProtectedSeed) -> Result<()> {
        self.state.insert_seed(seed)?;
        self.save()
    }

    fn seed(&self, id: SeedId) -> Result<Option<ProtectedSeed>> {
        self.state.seed(id)
    }

    fn remove_seed(&mut self, id: SeedId) -> Result<()> {
        self.state.remove_seed(id)?;
        self.save()
    }

    fn insert_request(&mut self, request: DisclosureRequest) -> Result<()> {
        self.state.insert_request(request)?;
        self.save()
    }

    fn request(&self, id: RequestId) -> Result<Option<DisclosureRequest>> {
        self.state.request(id)
    }

    fn resolve_request(&mut self, id: RequestId) -> Result<()> {
        self.state.resolve_request(id)?;
        self.save()
    }

    fn unresolved_requests(&self) -> Result<Vec<DisclosureRequest>> {
        self.state.unresolved_requests()
    }

    fn insert_vote(&mut self, vote: ApprovalVote) -> Result<()> {
        self.state.insert_vote(vote)?;
        self.save()
    }

    fn votes_for(&self, request_id: RequestId) -> Result<Vec<ApprovalVote>> {
        self.state.votes_for(request_id)
    }

    fn set_vote(&mut self, request_id: RequestId, member: &str, approved: bool) -> Result<bool> {
        let updated = self.state.set_vote(request_id, member, approved)?;
        if updated {
            self.save()?;
        }
        Ok(updated)
    }
}

impl Membership for FileStore {
    fn members_of(&self, vault_id: VaultId) -> Result<BTreeSet<MemberId>> {
        self.state.members_of(vault_id)
    }
}
