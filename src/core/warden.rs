//! Secret release façade.
//!
//! The only entry point callers use. Composes the quorum state machine
//! (to gate access) with the seed codec or a stored value (to produce the
//! payload once gated). Owns the store handle; every operation runs under
//! one mutex so a vote update and its resolution check can never interleave
//! with another voter's.

use std::collections::BTreeSet;
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::codec::{self, otp};
use crate::core::domain::{
    ApprovalStatus, DisclosureRequest, PlainSecret, ProtectedSecret, ProtectedSeed, SecretPayload,
    VaultInfo,
};
use crate::core::store::{Membership, Store};
use crate::core::types::{MemberId, RequestId, SecretId, SeedId, VaultId};
use crate::core::{quorum, validation};
use crate::error::{QuorumError, Result, StoreError, ValidationError};

/// The primary interface for warden operations.
pub struct Warden<S> {
    store: Mutex<S>,
}

impl<S: Store + Membership> Warden<S> {
    /// Wrap a store handle. The handle is owned by the composition root
    /// and passed in; the core holds no global state.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Consume the façade and hand the store back.
    pub fn into_store(self) -> S {
        self.store.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()).into())
    }

    // --- vaults & membership ---

    /// Create a vault with a founding member.
    pub fn create_vault(
        &self,
        name: &str,
        description: &str,
        founder: &str,
    ) -> Result<VaultInfo> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        validation::validate_member_name(founder)?;

        let vault = VaultInfo::new(
            name.to_string(),
            description.to_string(),
            founder.to_string(),
        );
        debug!(vault = %vault.id, name, founder, "creating vault");
        self.lock()?.insert_vault(vault.clone())?;
        Ok(vault)
    }

    /// Add a member to a vault.
    ///
    /// Open requests are unaffected: their electorate was snapshotted at
    /// creation time.
    pub fn add_member(&self, vault_id: VaultId, member: &str) -> Result<()> {
        validation::validate_member_name(member)?;

        let mut store = self.lock()?;
        let mut vault = store
            .vault(vault_id)?
            .ok_or(QuorumError::NoSuchVault(vault_id))?;
        vault.members.insert(member.to_string());
        vault.shares_n = vault.members.len() as u32;
        store.update_vault(vault)
    }

    /// Remove a member from a vault.
    pub fn remove_member(&self, vault_id: VaultId, member: &str) -> Result<()> {
        let mut store = self.lock()?;
        let mut vault = store
            .vault(vault_id)?
            .ok_or(QuorumError::NoSuchVault(vault_id))?;
        if !vault.is_member(member) {
            return Err(QuorumError::InvalidMember(member.to_string()).into());
        }
        vault.members.remove(member);
        vault.shares_n = vault.members.len() as u32;
        store.update_vault(vault)
    }

    /// Current members of a vault.
    pub fn members(&self, vault_id: VaultId) -> Result<BTreeSet<MemberId>> {
        self.lock()?.members_of(vault_id)
    }

    /// Look up one vault.
    pub fn vault(&self, vault_id: VaultId) -> Result<Option<VaultInfo>> {
        self.lock()?.vault(vault_id)
    }

    /// All vaults visible in the store.
    pub fn vaults(&self) -> Result<Vec<VaultInfo>> {
        self.lock()?.vaults()
    }

    // --- enrollment ---

    /// Each vault protects at most one secret. Enrolling a new one removes
    /// the old row (and its seed, for TOTP); already-open requests keep
    /// pointing at the superseded id and can no longer reveal anything.
    fn supersede_secret(store: &mut S, vault_id: VaultId) -> Result<()> {
        if let Some(existing) = store.secret_for_vault(vault_id)? {
            debug!(secret = %existing.id, %vault_id, "superseding secret");
            if let SecretPayload::Totp { seed_id } = existing.payload {
                store.remove_seed(seed_id)?;
            }
            store.remove_secret(existing.id)?;
        }
        Ok(())
    }

    /// Store a plaintext-equivalent secret for a vault.
    pub fn set_stored_secret(&self, vault_id: VaultId, value: &str) -> Result<ProtectedSecret> {
        validation::validate_value(value)?;

        let secret = ProtectedSecret::new(
            vault_id,
            SecretPayload::Stored {
                value: value.to_string(),
            },
        );
        debug!(secret = %secret.id, %vault_id, "storing secret");
        let mut store = self.lock()?;
        Self::supersede_secret(&mut store, vault_id)?;
        store.insert_secret(secret.clone())?;
        Ok(secret)
    }

    /// Enroll a TOTP seed for a vault.
    ///
    /// Validates that the seed text decodes as base32, seals it under the
    /// label-derived key, and registers a TOTP-backed protected secret
    /// pointing at the sealed seed. The plaintext seed is never stored.
    pub fn enroll_seed(
        &self,
        vault_id: VaultId,
        label: &str,
        seed_text: &[u8],
        epoch_start: i64,
        interval_secs: i64,
        digits: u32,
    ) -> Result<(ProtectedSeed, ProtectedSecret)> {
        validation::validate_label(label)?;
        validation::validate_otp_params(interval_secs, digits)?;
        otp::validate_seed_text(seed_text)?;

        let ciphertext = codec::encrypt(label, seed_text)?;
        let mut seed = ProtectedSeed::new(label.to_string(), ciphertext);
        seed.epoch_start = epoch_start;
        seed.interval_secs = interval_secs;
        seed.digits = digits;

        let secret = ProtectedSecret::new(vault_id, SecretPayload::Totp { seed_id: seed.id });
        debug!(seed = %seed.id, secret = %secret.id, label, "enrolling totp seed");

        let mut store = self.lock()?;
        Self::supersede_secret(&mut store, vault_id)?;
        store.insert_seed(seed.clone())?;
        store.insert_secret(secret.clone())?;
        Ok((seed, secret))
    }

    /// Protected secret currently guarded by a vault, if any.
    pub fn secret_for_vault(&self, vault_id: VaultId) -> Result<Option<ProtectedSecret>> {
        self.lock()?.secret_for_vault(vault_id)
    }

    /// Sealed seed record by id. Ciphertext only; nothing here decrypts.
    pub fn seed(&self, seed_id: SeedId) -> Result<Option<ProtectedSeed>> {
        self.lock()?.seed(seed_id)
    }

    // --- disclosure workflow ---

    /// Ask to reveal a protected secret.
    pub fn request_disclosure(&self, secret_id: SecretId, member: &str) -> Result<ApprovalStatus> {
        let mut store = self.lock()?;
        quorum::create_request(&mut *store, secret_id, member)
    }

    /// Record a member's vote on a disclosure request.
    ///
    /// The whole read-modify-decide-write runs under the store mutex, so
    /// concurrent voters can neither lose updates nor double-resolve.
    pub fn vote(&self, request_id: RequestId, member: &str, approve: bool) -> Result<ApprovalStatus> {
        let mut store = self.lock()?;
        quorum::cast_vote(&mut *store, request_id, member, approve)
    }

    /// Current approval state of a request.
    pub fn status(&self, request_id: RequestId) -> Result<ApprovalStatus> {
        let store = self.lock()?;
        quorum::status(&*store, request_id)
    }

    /// Unresolved requests, oldest first.
    pub fn pending_requests(&self) -> Result<Vec<DisclosureRequest>> {
        let mut requests = self.lock()?.unresolved_requests()?;
        requests.sort_by_key(|r| r.created_at);
        Ok(requests)
    }

    /// Reveal the secret behind a resolved request.
    ///
    /// Fails with `QuorumError::NotApproved` unless the request is resolved;
    /// until then nothing about the payload is touched, so the error carries
    /// no information about the secret. The caller must be a voter on the
    /// request. The returned plaintext is never logged or persisted.
    pub fn reveal(&self, request_id: RequestId, member: &str) -> Result<PlainSecret> {
        self.reveal_at(request_id, member, Utc::now().timestamp())
    }

    /// Like [`Self::reveal`], with an explicit clock for TOTP derivation.
    pub fn reveal_at(&self, request_id: RequestId, member: &str, now: i64) -> Result<PlainSecret> {
        let store = self.lock()?;

        let status = quorum::status(&*store, request_id)?;
        if !status.approvals.contains_key(member) {
            return Err(QuorumError::NotAVoter {
                request: request_id,
                member: member.to_string(),
            }
            .into());
        }
        if !status.resolved {
            return Err(QuorumError::NotApproved(request_id).into());
        }

        let request = store
            .request(request_id)?
            .ok_or(QuorumError::UnknownRequest(request_id))?;
        let secret = store
            .secret(request.secret_id)?
            .ok_or(QuorumError::NoSuchSecret(request.secret_id))?;

        match secret.payload {
            SecretPayload::Stored { value } => Ok(PlainSecret::Stored(Zeroizing::new(value))),
            SecretPayload::Totp { seed_id } => {
                let seed = store
                    .seed(seed_id)?
                    .ok_or(QuorumError::NoSuchSecret(seed_id))?;
                let plain = codec::decrypt(&seed.label, &seed.ciphertext)?;
                let code = otp::derive(
                    &plain,
                    seed.epoch_start,
                    now,
                    seed.interval_secs,
                    seed.digits,
                )?;
                Ok(PlainSecret::OneTime(code))
            }
        }
    }
}
