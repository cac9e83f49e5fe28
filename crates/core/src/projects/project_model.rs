//! Project domain models.

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Construction project type, derived from the project name and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Industrial,
    Commercial,
    Residential,
    Infrastructure,
    Healthcare,
}

impl ProjectType {
    /// All project types in classification priority order.
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Industrial,
        ProjectType::Commercial,
        ProjectType::Residential,
        ProjectType::Infrastructure,
        ProjectType::Healthcare,
    ];

    /// Tag value that forces this type during classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Industrial => "industrial",
            ProjectType::Commercial => "commercial",
            ProjectType::Residential => "residential",
            ProjectType::Infrastructure => "infrastructure",
            ProjectType::Healthcare => "healthcare",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only project input supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub total_budget: Decimal,
}

impl ProjectDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, total_budget: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: BTreeSet::new(),
            total_budget,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}
