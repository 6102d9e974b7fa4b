//! Domain types.
//!
//! Plain data records persisted by the store. No framework types leak in or
//! out of these.

mod request;
mod secret;
mod seed;
mod vault_info;

pub use request::{ApprovalStatus, ApprovalVote, DisclosureRequest};
pub use secret::{PlainSecret, ProtectedSecret, SecretPayload};
pub use seed::ProtectedSeed;
pub use vault_info::VaultInfo;
