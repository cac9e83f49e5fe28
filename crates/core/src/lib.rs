//! RAB Generator Core - budget allocation domain, catalog, and services.
//!
//! This crate turns construction project descriptors into itemised cost
//! registers (Rencana Anggaran Biaya). It is storage-agnostic and defines
//! the traits a persistence layer implements.

pub mod approvals;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod estimation;
pub mod projects;
pub mod rab;
pub mod utils;

// Re-export the generation entry points
pub use catalog::{RabCatalog, RabConfig};
pub use projects::{ProjectDescriptor, ProjectType};
pub use rab::{BudgetAllocationEngine, BudgetRegister, LineItem, RabService};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
