//! Disclosure requests and approval votes.
//!
//! A `DisclosureRequest` is one act of asking to reveal a protected secret.
//! Its `ApprovalVote` rows record each member's stance; the full set is
//! created together with the request and rows are only ever updated in
//! place, never deleted, so the pair doubles as an audit trail.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{MemberId, RequestId, SecretId};

/// A tracked request to reveal a protected secret.
///
/// `resolved` is monotonic: it flips false→true exactly once, when the last
/// outstanding approval lands, and never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisclosureRequest {
    pub id: RequestId,
    pub secret_id: SecretId,
    pub requester: MemberId,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl DisclosureRequest {
    /// Create a new unresolved request.
    pub fn new(secret_id: SecretId, requester: MemberId) -> Self {
        Self {
            id: Uuid::new_v4(),
            secret_id,
            requester,
            resolved: false,
            created_at: Utc::now(),
        }
    }
}

/// One member's yes/no stance on one disclosure request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalVote {
    pub id: Uuid,
    pub request_id: RequestId,
    pub member: MemberId,
    pub approved: bool,
}

impl ApprovalVote {
    pub fn new(request_id: RequestId, member: MemberId, approved: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            request_id,
            member,
            approved,
        }
    }
}

/// Snapshot of a request's approval state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStatus {
    pub request_id: RequestId,
    pub resolved: bool,
    pub approvals: BTreeMap<MemberId, bool>,
}

impl ApprovalStatus {
    /// Number of approvals still outstanding.
    pub fn outstanding(&self) -> usize {
        self.approvals.values().filter(|a| !**a).count()
    }

    /// Members whose approval is still outstanding.
    pub fn waiting_on(&self) -> Vec<&MemberId> {
        self.approvals
            .iter()
            .filter(|(_, approved)| !**approved)
            .map(|(member, _)| member)
            .collect()
    }
}
