//! Catalog domain models: categories, unit prices, quantity rules and
//! allocation profiles.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::projects::ProjectType;

/// Cost category with an ordered item list.
///
/// Item order is significant: generation takes a prefix of this list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub key: String,
    pub display_name: String,
    pub items: Vec<String>,
}

/// Unit of measure and price for one catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitPrice {
    pub unit: String,
    pub price: Decimal,
}

/// How an item's quantity follows the project budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum QuantityRule {
    /// `base` per budget unit, scaled and rounded half-up.
    Scaled { base: Decimal },
    /// Like `Scaled`, but never below 1 for a positive budget.
    AtLeastOne { base: Decimal },
    /// Lump-sum item with a constant quantity for a positive budget.
    Fixed { quantity: u64 },
}

/// Budget split and special items for one project type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationProfile {
    pub project_type: ProjectType,
    /// Category keys in generation order.
    pub categories: Vec<String>,
    /// Fraction of the total budget per category key.
    pub multipliers: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub special_items: Vec<String>,
}

impl AllocationProfile {
    /// Multiplier for a category key, zero when absent.
    pub fn multiplier(&self, category_key: &str) -> Decimal {
        self.multipliers
            .get(category_key)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of multipliers over the profile's categories.
    pub fn multiplier_sum(&self) -> Decimal {
        self.categories
            .iter()
            .map(|key| self.multiplier(key))
            .sum()
    }
}
