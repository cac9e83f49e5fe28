//! Core error types for the RAB generator.
//!
//! Configuration problems are detected once, when the catalog is loaded.
//! Storage errors are produced by repository implementations and converted
//! to string form so this crate stays storage-agnostic.

use thiserror::Error;

use crate::projects::ProjectType;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the RAB generator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid catalog configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Catalog and profile problems found at load time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("No allocation profile for project type {0}")]
    MissingProfile(ProjectType),

    #[error("Multipliers for {project_type} sum to {sum}, expected 1.0")]
    MultiplierSum {
        project_type: ProjectType,
        sum: String,
    },

    #[error("Profile {project_type} references unknown category '{category}'")]
    UnknownCategory {
        project_type: ProjectType,
        category: String,
    },

    #[error("Profile {project_type} has no multiplier for category '{category}'")]
    MissingMultiplier {
        project_type: ProjectType,
        category: String,
    },

    #[error("Profile {project_type} has a multiplier for '{category}' which is not in its category list")]
    StrayMultiplier {
        project_type: ProjectType,
        category: String,
    },

    #[error("Multiplier for '{category}' in {project_type} must be between 0 and 1")]
    MultiplierOutOfRange {
        project_type: ProjectType,
        category: String,
    },

    #[error("Project type {0} has more than one allocation profile")]
    DuplicateProfile(ProjectType),

    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("Item '{item}' referenced by {referenced_by} has no unit price")]
    UnpricedItem { item: String, referenced_by: String },

    #[error("Unit price for '{0}' must be positive")]
    NonPositivePrice(String),

    #[error("Reference quantity for '{0}' must not be negative")]
    NegativeReferenceQuantity(String),

    #[error("Approval percentage {0} is above 100")]
    InvalidApprovalPercent(u8),

    #[error("Base budget unit must be positive")]
    NonPositiveBaseBudgetUnit,
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
