//! Persistence abstraction.
//!
//! The core never talks to a concrete datastore. It works against two narrow
//! traits: [`Store`] for entity persistence (explicit typed methods per
//! entity kind, statically dispatched) and [`Membership`] for the group
//! lookup the quorum machine needs. Backends:
//!
//! - [`MemoryStore`]: in-process, used by tests and as the state held by
//!   the file backend
//! - [`FileStore`]: `.warden.toml` on disk, loaded on open and written
//!   back after each mutation

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::collections::BTreeSet;

use crate::core::domain::{ApprovalVote, DisclosureRequest, ProtectedSecret, ProtectedSeed, VaultInfo};
use crate::core::types::{MemberId, RequestId, SecretId, SeedId, VaultId};
use crate::error::Result;

/// Entity persistence.
///
/// Semantics expected by the core: at-least read-your-writes consistency,
/// and per-call atomicity for each method. Cross-call atomicity (the vote
/// update plus the resolution check) is the caller's job; the façade holds
/// a lock around the whole unit of work.
pub trait Store {
    // --- vaults ---
    fn insert_vault(&mut self, vault: VaultInfo) -> Result<()>;
    fn vault(&self, id: VaultId) -> Result<Option<VaultInfo>>;
    fn vaults(&self) -> Result<Vec<VaultInfo>>;
    fn update_vault(&mut self, vault: VaultInfo) -> Result<()>;

    // --- protected secrets ---
    fn insert_secret(&mut self, secret: ProtectedSecret) -> Result<()>;
    fn secret(&self, id: SecretId) -> Result<Option<ProtectedSecret>>;
    fn secret_for_vault(&self, vault_id: VaultId) -> Result<Option<ProtectedSecret>>;
    fn remove_secret(&mut self, id: SecretId) -> Result<()>;

    // --- protected seeds ---
    fn insert_seed(&mut self, seed: ProtectedSeed) -> Result<()>;
    fn seed(&self, id: SeedId) -> Result<Option<ProtectedSeed>>;
    fn remove_seed(&mut self, id: SeedId) -> Result<()>;

    // --- disclosure requests ---
    fn insert_request(&mut self, request: DisclosureRequest) -> Result<()>;
    fn request(&self, id: RequestId) -> Result<Option<DisclosureRequest>>;
    /// Flip `resolved` to true. Monotonic; never unsets.
    fn resolve_request(&mut self, id: RequestId) -> Result<()>;
    fn unresolved_requests(&self) -> Result<Vec<DisclosureRequest>>;

    // --- approval votes ---
    fn insert_vote(&mut self, vote: ApprovalVote) -> Result<()>;
    fn votes_for(&self, request_id: RequestId) -> Result<Vec<ApprovalVote>>;
    /// Set one member's vote on one request. Returns false if no such row.
    fn set_vote(&mut self, request_id: RequestId, member: &str, approved: bool) -> Result<bool>;
}

/// Group membership lookup.
///
/// Kept separate from [`Store`] because it is the only thing the quorum
/// machine needs to know about the outside world.
pub trait Membership {
    fn members_of(&self, vault_id: VaultId) -> Result<BTreeSet<MemberId>>;
}
