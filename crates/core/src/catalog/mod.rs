//! Catalog module - categories, unit prices, quantity rules, allocation
//! profiles and their load-time validation.

mod catalog_builtin;
mod catalog_config;
mod catalog_model;
mod catalog_registry;


pub use catalog_config::RabConfig;
pub use catalog_model::{AllocationProfile, Category, QuantityRule, UnitPrice};
pub use catalog_registry::RabCatalog;
