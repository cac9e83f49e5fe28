//! RAB module - line item register, generation engine, and service.

mod rab_engine;
mod rab_model;
mod rab_service;
mod rab_traits;

#[cfg(test)]
mod rab_engine_tests;


pub use rab_engine::{selection_size, BudgetAllocationEngine};
pub use rab_model::{
    BudgetRegister, CategoryBreakdown, FailedProject, GenerationMetadata, LineItem,
    ProjectTypeSummary, RegenerationSummary, SkippedItem,
};
pub use rab_service::RabService;
pub use rab_traits::{RabRepositoryTrait, RabServiceTrait};
