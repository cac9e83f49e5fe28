//! Approvals module - deterministic approval assignment for line items.

mod approval_assigner;
mod approval_model;

pub use approval_assigner::ApprovalAssigner;
pub use approval_model::{ApprovalPolicy, ApprovalState, ItemKind};
