//! Catalog configuration as loaded from JSON or the embedded defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{catalog_builtin, AllocationProfile, Category, QuantityRule, UnitPrice};
use crate::approvals::ApprovalPolicy;
use crate::constants::{BASE_BUDGET_UNIT, DEFAULT_REFERENCE_QUANTITY, SPECIAL_ITEMS_LABEL};
use crate::errors::{Error, Result};

fn default_base_budget_unit() -> Decimal {
    Decimal::from(BASE_BUDGET_UNIT)
}

fn default_reference_quantity() -> Decimal {
    Decimal::from(DEFAULT_REFERENCE_QUANTITY)
}

fn default_special_items_label() -> String {
    SPECIAL_ITEMS_LABEL.to_string()
}

/// Unvalidated catalog configuration.
///
/// Turned into an immutable [`super::RabCatalog`] by `RabCatalog::load`,
/// which performs all consistency checks once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RabConfig {
    #[serde(default = "default_base_budget_unit")]
    pub base_budget_unit: Decimal,
    #[serde(default = "default_reference_quantity")]
    pub default_reference_quantity: Decimal,
    #[serde(default = "default_special_items_label")]
    pub special_items_label: String,
    /// Keep items without a unit price instead of rejecting the catalog.
    /// They are skipped and reported at generation time.
    #[serde(default)]
    pub allow_unpriced_items: bool,
    #[serde(default)]
    pub approval_policy: ApprovalPolicy,
    pub categories: Vec<Category>,
    pub unit_prices: BTreeMap<String, UnitPrice>,
    #[serde(default)]
    pub reference_quantities: BTreeMap<String, QuantityRule>,
    pub profiles: Vec<AllocationProfile>,
}

impl RabConfig {
    /// The embedded construction catalog.
    pub fn builtin() -> Self {
        Self {
            base_budget_unit: default_base_budget_unit(),
            default_reference_quantity: default_reference_quantity(),
            special_items_label: default_special_items_label(),
            allow_unpriced_items: false,
            approval_policy: ApprovalPolicy::default(),
            categories: catalog_builtin::categories(),
            unit_prices: catalog_builtin::unit_prices(),
            reference_quantities: catalog_builtin::reference_quantities(),
            profiles: catalog_builtin::profiles(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading RAB catalog configuration from {}", path.display());
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
