//! Projects module - project descriptors, types, and classification.

mod project_classifier;
mod project_model;
mod project_traits;

pub use project_classifier::classify;
pub use project_model::{ProjectDescriptor, ProjectType};
pub use project_traits::ProjectSourceTrait;
