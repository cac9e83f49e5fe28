//! Approval assignment for generated line items.
//!
//! Assignment is a pure function of the policy, the project id and the line
//! number, so regenerating a register reproduces the same approvals.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::{ApprovalPolicy, ApprovalState, ItemKind};
use crate::constants::{SPECIAL_ITEM_APPROVER, STANDARD_ITEM_APPROVER};
use crate::rab::LineItem;

#[derive(Debug, Clone, Copy)]
pub struct ApprovalAssigner {
    policy: ApprovalPolicy,
}

impl ApprovalAssigner {
    pub fn new(policy: ApprovalPolicy) -> Self {
        Self { policy }
    }

    /// Computes the approval state for a generated item.
    pub fn assign(&self, item: &LineItem, approved_at: DateTime<Utc>) -> ApprovalState {
        match self.policy {
            ApprovalPolicy::Pending => ApprovalState::pending(),
            ApprovalPolicy::Hashed {
                standard_percent,
                special_percent,
            } => {
                let (percent, approver) = match item.kind {
                    ItemKind::Standard => (standard_percent, STANDARD_ITEM_APPROVER),
                    ItemKind::Special => (special_percent, SPECIAL_ITEM_APPROVER),
                };
                if approval_bucket(&item.project_id, item.line_number) < percent {
                    ApprovalState::approved(approver, approved_at)
                } else {
                    ApprovalState::pending()
                }
            }
        }
    }
}

/// Maps (project id, line number) onto a stable bucket in 0..100.
fn approval_bucket(project_id: &str, line_number: u32) -> u8 {
    let mut hasher = Sha256::new();
    hasher.update(project_id.as_bytes());
    hasher.update(b"|");
    hasher.update(line_number.to_string().as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % 100) as u8
}
