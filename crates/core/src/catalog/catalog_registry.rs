//! Validated, immutable catalog shared by every generation run.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use rust_decimal::Decimal;

use super::{AllocationProfile, Category, QuantityRule, RabConfig, UnitPrice};
use crate::approvals::ApprovalPolicy;
use crate::constants::MULTIPLIER_TOLERANCE;
use crate::errors::{ConfigurationError, Error, Result};
use crate::projects::ProjectType;

/// Read-only lookup tables for categories, prices, quantity rules and
/// allocation profiles.
#[derive(Debug, Clone)]
pub struct RabCatalog {
    base_budget_unit: Decimal,
    default_reference_quantity: Decimal,
    special_items_label: String,
    approval_policy: ApprovalPolicy,
    categories: HashMap<String, Category>,
    unit_prices: HashMap<String, UnitPrice>,
    reference_quantities: HashMap<String, QuantityRule>,
    profiles: HashMap<ProjectType, AllocationProfile>,
}

impl RabCatalog {
    /// Validates the configuration and builds the catalog.
    pub fn load(config: RabConfig) -> Result<Self> {
        validate(&config)?;

        let catalog = Self {
            base_budget_unit: config.base_budget_unit,
            default_reference_quantity: config.default_reference_quantity,
            special_items_label: config.special_items_label,
            approval_policy: config.approval_policy,
            categories: config
                .categories
                .into_iter()
                .map(|c| (c.key.clone(), c))
                .collect(),
            unit_prices: config.unit_prices.into_iter().collect(),
            reference_quantities: config.reference_quantities.into_iter().collect(),
            profiles: config
                .profiles
                .into_iter()
                .map(|p| (p.project_type, p))
                .collect(),
        };

        debug!(
            "Loaded RAB catalog: {} categories, {} priced items, {} profiles",
            catalog.categories.len(),
            catalog.unit_prices.len(),
            catalog.profiles.len()
        );
        Ok(catalog)
    }

    /// Loads the embedded construction catalog.
    pub fn builtin() -> Result<Self> {
        Self::load(RabConfig::builtin())
    }

    pub fn get_profile(&self, project_type: ProjectType) -> Result<&AllocationProfile> {
        self.profiles
            .get(&project_type)
            .ok_or_else(|| Error::Configuration(ConfigurationError::MissingProfile(project_type)))
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    pub fn unit_price(&self, item_name: &str) -> Option<&UnitPrice> {
        self.unit_prices.get(item_name)
    }

    pub fn quantity_rule(&self, item_name: &str) -> Option<QuantityRule> {
        self.reference_quantities.get(item_name).copied()
    }

    pub fn reference_quantities(&self) -> &HashMap<String, QuantityRule> {
        &self.reference_quantities
    }

    pub fn base_budget_unit(&self) -> Decimal {
        self.base_budget_unit
    }

    pub fn default_reference_quantity(&self) -> Decimal {
        self.default_reference_quantity
    }

    pub fn special_items_label(&self) -> &str {
        &self.special_items_label
    }

    pub fn approval_policy(&self) -> ApprovalPolicy {
        self.approval_policy
    }
}

fn validate(config: &RabConfig) -> std::result::Result<(), ConfigurationError> {
    if config.base_budget_unit <= Decimal::ZERO {
        return Err(ConfigurationError::NonPositiveBaseBudgetUnit);
    }
    if config.default_reference_quantity < Decimal::ZERO {
        return Err(ConfigurationError::NegativeReferenceQuantity(
            "<default>".to_string(),
        ));
    }
    if let ApprovalPolicy::Hashed {
        standard_percent,
        special_percent,
    } = config.approval_policy
    {
        if let Some(bad) = [standard_percent, special_percent]
            .into_iter()
            .find(|p| *p > 100)
        {
            return Err(ConfigurationError::InvalidApprovalPercent(bad));
        }
    }

    let mut category_keys: HashSet<&str> = HashSet::new();
    for category in &config.categories {
        if !category_keys.insert(category.key.as_str()) {
            return Err(ConfigurationError::DuplicateCategory(category.key.clone()));
        }
    }

    for (item, price) in &config.unit_prices {
        if price.price <= Decimal::ZERO {
            return Err(ConfigurationError::NonPositivePrice(item.clone()));
        }
    }

    for (item, rule) in &config.reference_quantities {
        match rule {
            QuantityRule::Scaled { base } | QuantityRule::AtLeastOne { base }
                if *base < Decimal::ZERO =>
            {
                return Err(ConfigurationError::NegativeReferenceQuantity(item.clone()));
            }
            _ => {}
        }
    }

    validate_profiles(config, &category_keys)?;
    validate_item_prices(config)
}

fn validate_profiles(
    config: &RabConfig,
    category_keys: &HashSet<&str>,
) -> std::result::Result<(), ConfigurationError> {
    let mut seen: HashSet<ProjectType> = HashSet::new();

    for profile in &config.profiles {
        let project_type = profile.project_type;
        if !seen.insert(project_type) {
            return Err(ConfigurationError::DuplicateProfile(project_type));
        }

        for key in &profile.categories {
            if !category_keys.contains(key.as_str()) {
                return Err(ConfigurationError::UnknownCategory {
                    project_type,
                    category: key.clone(),
                });
            }
            let multiplier = profile.multipliers.get(key).copied().ok_or_else(|| {
                ConfigurationError::MissingMultiplier {
                    project_type,
                    category: key.clone(),
                }
            })?;
            if multiplier < Decimal::ZERO || multiplier > Decimal::ONE {
                return Err(ConfigurationError::MultiplierOutOfRange {
                    project_type,
                    category: key.clone(),
                });
            }
        }

        if let Some(stray) = profile
            .multipliers
            .keys()
            .find(|key| !profile.categories.contains(*key))
        {
            return Err(ConfigurationError::StrayMultiplier {
                project_type,
                category: stray.clone(),
            });
        }

        let sum = profile.multiplier_sum();
        if (sum - Decimal::ONE).abs() > MULTIPLIER_TOLERANCE {
            return Err(ConfigurationError::MultiplierSum {
                project_type,
                sum: sum.to_string(),
            });
        }
    }

    match ProjectType::ALL.iter().find(|t| !seen.contains(*t)) {
        Some(missing) => Err(ConfigurationError::MissingProfile(*missing)),
        None => Ok(()),
    }
}

/// Every item a generation run can reach must resolve to a unit price,
/// unless the configuration opts into skipping unpriced items.
fn validate_item_prices(config: &RabConfig) -> std::result::Result<(), ConfigurationError> {
    let category_refs = config.categories.iter().flat_map(|c| {
        c.items
            .iter()
            .map(move |item| (item, format!("category '{}'", c.key)))
    });
    let special_refs = config.profiles.iter().flat_map(|p| {
        p.special_items
            .iter()
            .map(move |item| (item, format!("{} special items", p.project_type)))
    });

    for (item, referenced_by) in category_refs.chain(special_refs) {
        if config.unit_prices.contains_key(item) {
            continue;
        }
        if config.allow_unpriced_items {
            warn!(
                "Item '{}' referenced by {} has no unit price and will be skipped",
                item, referenced_by
            );
        } else {
            return Err(ConfigurationError::UnpricedItem {
                item: item.clone(),
                referenced_by,
            });
        }
    }
    Ok(())
}
