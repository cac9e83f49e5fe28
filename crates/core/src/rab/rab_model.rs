//! RAB register domain models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::approvals::{ApprovalState, ItemKind};
use crate::constants::LINE_ITEM_ID_PREFIX;
use crate::projects::ProjectType;

/// One priced line of a project's RAB.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub project_id: String,
    /// 1-based position in generation order.
    pub line_number: u32,
    pub kind: ItemKind,
    /// Display name of the category (or the special-items label).
    pub category: String,
    pub item_name: String,
    pub description: String,
    pub unit: String,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub notes: String,
    pub is_approved: bool,
    pub approved_by: Option<String>,
    pub approved_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LineItem {
    /// Stable id, e.g. `RAB-PRJ-001-007`.
    pub fn line_item_id(project_id: &str, line_number: u32) -> String {
        format!("{}-{}-{:03}", LINE_ITEM_ID_PREFIX, project_id, line_number)
    }

    pub fn apply_approval(&mut self, state: ApprovalState) {
        self.is_approved = state.is_approved;
        self.approved_by = state.approved_by;
        self.approved_date = state.approved_date;
    }
}

/// A category or special item that had no unit price during generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedItem {
    pub category: String,
    pub item_name: String,
}

/// Declared versus realized value for one category of a register.
///
/// `allocated_budget` is the profile share of the total budget and is not
/// enforced against the realized item subtotals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_key: Option<String>,
    pub category_name: String,
    pub allocated_budget: Option<Decimal>,
    pub realized_value: Decimal,
    pub item_count: usize,
}

/// Context of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub project_type: ProjectType,
    pub total_budget: Decimal,
    pub generated_at: DateTime<Utc>,
    pub skipped_items: Vec<SkippedItem>,
    pub categories: Vec<CategoryBreakdown>,
}

impl GenerationMetadata {
    pub fn new(project_type: ProjectType, total_budget: Decimal, generated_at: DateTime<Utc>) -> Self {
        Self {
            project_type,
            total_budget,
            generated_at,
            skipped_items: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_items.len()
    }
}

/// Ordered line items of one project plus their rollups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRegister {
    pub project_id: String,
    pub items: Vec<LineItem>,
    pub total_value: Decimal,
    pub approved_value: Decimal,
    pub item_count: usize,
    /// Present on freshly generated registers, absent when rebuilt from storage.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<GenerationMetadata>,
}

impl BudgetRegister {
    /// Builds a register and its rollups from items in display order.
    pub fn from_items(project_id: &str, items: Vec<LineItem>) -> Self {
        let total_value = items.iter().map(|item| item.subtotal).sum();
        let approved_value = items
            .iter()
            .filter(|item| item.is_approved)
            .map(|item| item.subtotal)
            .sum();
        let item_count = items.len();

        Self {
            project_id: project_id.to_string(),
            items,
            total_value,
            approved_value,
            item_count,
            metadata: None,
        }
    }

    pub fn empty(project_id: &str) -> Self {
        Self::from_items(project_id, Vec::new())
    }

    pub fn with_metadata(mut self, metadata: GenerationMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn approved_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_approved).count()
    }

    /// Realized value per category display name.
    pub fn value_by_category(&self) -> BTreeMap<String, Decimal> {
        let mut values: BTreeMap<String, Decimal> = BTreeMap::new();
        for item in &self.items {
            *values.entry(item.category.clone()).or_insert(Decimal::ZERO) += item.subtotal;
        }
        values
    }
}

/// Failure of one project during batch regeneration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailedProject {
    pub project_id: String,
    pub project_name: String,
    pub error: String,
}

/// Per project type totals of a batch regeneration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeSummary {
    pub project_count: usize,
    pub total_budget: Decimal,
    pub total_value: Decimal,
}

/// Outcome of regenerating every known project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegenerationSummary {
    pub projects_processed: usize,
    pub projects_succeeded: usize,
    pub failed_projects: Vec<FailedProject>,
    pub total_items: usize,
    pub total_value: Decimal,
    pub average_value_per_project: Decimal,
    pub by_project_type: BTreeMap<ProjectType, ProjectTypeSummary>,
}
