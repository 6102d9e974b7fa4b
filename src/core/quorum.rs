//! Quorum approval state machine.
//!
//! Tracks disclosure requests and individual approval votes, and decides
//! when a protected secret may be revealed. The release rule is unanimity:
//! a request resolves when every member's vote is approved. There is no
//! rejection or expiry state; a `false` vote leaves the request pending.
//!
//! Every operation here is a single read-modify-decide-write over the store.
//! Callers must serialize concurrent calls per store (the façade holds a
//! mutex); these functions take `&mut` so the borrow checker enforces it
//! in-process.

use tracing::debug;

use crate::core::domain::{ApprovalStatus, ApprovalVote, DisclosureRequest};
use crate::core::store::{Membership, Store};
use crate::core::types::{RequestId, SecretId};
use crate::error::{QuorumError, Result};

/// Open a disclosure request for a protected secret.
///
/// Seeds one vote row per current vault member, with the requester's row
/// pre-approved. The member set is snapshotted here; later membership
/// changes do not alter an open request's electorate.
///
/// # Errors
///
/// `QuorumError::NoSuchSecret` if the secret id is unknown;
/// `QuorumError::InvalidMember` if the requester is not a vault member.
pub fn create_request<S: Store + Membership>(
    store: &mut S,
    secret_id: SecretId,
    requester: &str,
) -> Result<ApprovalStatus> {
    let secret = store
        .secret(secret_id)?
        .ok_or(QuorumError::NoSuchSecret(secret_id))?;

    let members = store.members_of(secret.vault_id)?;
    if !members.contains(requester) {
        return Err(QuorumError::InvalidMember(requester.to_string()).into());
    }

    let request = DisclosureRequest::new(secret_id, requester.to_string());
    let request_id = request.id;
    debug!(%request_id, %secret_id, requester, "creating disclosure request");
    store.insert_request(request)?;

    for member in &members {
        let approved = member == requester;
        store.insert_vote(ApprovalVote::new(request_id, member.clone(), approved))?;
    }

    status(store, request_id)
}

/// Record one member's vote on a request.
///
/// Writes the vote as given. When `approve` is true and every row is
/// approved afterwards, the request resolves in the same unit of work.
/// Resolved requests are read-only: late votes fail.
///
/// # Errors
///
/// `QuorumError::UnknownRequest`, `QuorumError::AlreadyResolved`, or
/// `QuorumError::NotAVoter`.
pub fn cast_vote<S: Store>(
    store: &mut S,
    request_id: RequestId,
    member: &str,
    approve: bool,
) -> Result<ApprovalStatus> {
    let request = store
        .request(request_id)?
        .ok_or(QuorumError::UnknownRequest(request_id))?;

    if request.resolved {
        return Err(QuorumError::AlreadyResolved(request_id).into());
    }

    if !store.set_vote(request_id, member, approve)? {
        return Err(QuorumError::NotAVoter {
            request: request_id,
            member: member.to_string(),
        }
        .into());
    }
    debug!(%request_id, member, approve, "vote recorded");

    if approve {
        let votes = store.votes_for(request_id)?;
        if votes.iter().all(|v| v.approved) {
            store.resolve_request(request_id)?;
            debug!(%request_id, "quorum reached, request resolved");
        }
    }

    status(store, request_id)
}

/// Read a request's current approval state. Never mutates.
///
/// # Errors
///
/// `QuorumError::UnknownRequest` if the request id is unknown.
pub fn status<S: Store>(store: &S, request_id: RequestId) -> Result<ApprovalStatus> {
    let request = store
        .request(request_id)?
        .ok_or(QuorumError::UnknownRequest(request_id))?;

    let approvals = store
        .votes_for(request_id)?
        .into_iter()
        .map(|v| (v.member, v.approved))
        .collect();

    Ok(ApprovalStatus {
        request_id,
        resolved: request.resolved,
        approvals,
    })
}
