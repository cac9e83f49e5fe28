//! Approval domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a line item comes from a category list or the profile's special items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Standard,
    Special,
}

/// Approval fields stamped onto a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalState {
    pub is_approved: bool,
    pub approved_by: Option<String>,
    pub approved_date: Option<DateTime<Utc>>,
}

impl ApprovalState {
    pub fn pending() -> Self {
        Self {
            is_approved: false,
            approved_by: None,
            approved_date: None,
        }
    }

    pub fn approved(approver: &str, approved_date: DateTime<Utc>) -> Self {
        Self {
            is_approved: true,
            approved_by: Some(approver.to_string()),
            approved_date: Some(approved_date),
        }
    }
}

/// Deterministic approval policy applied during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "camelCase")]
pub enum ApprovalPolicy {
    /// Every generated item starts unapproved.
    Pending,
    /// Approves a stable share of items, keyed on project id and line number.
    Hashed {
        #[serde(rename = "standardPercent")]
        standard_percent: u8,
        #[serde(rename = "specialPercent")]
        special_percent: u8,
    },
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        ApprovalPolicy::Hashed {
            standard_percent: 70,
            special_percent: 50,
        }
    }
}
