//! Budget-scaled quantity estimation.
//!
//! `quantity = round_half_up(reference × total_budget / base_budget_unit)`,
//! with a floor of one for required items and a constant for lump-sum items.
//! Every estimate is zero for a non-positive budget.

use std::collections::HashMap;

use log::warn;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::{QuantityRule, RabCatalog};

#[derive(Debug, Clone)]
pub struct QuantityEstimator {
    base_budget_unit: Decimal,
    default_reference_quantity: Decimal,
    rules: HashMap<String, QuantityRule>,
}

impl QuantityEstimator {
    pub fn new(
        base_budget_unit: Decimal,
        default_reference_quantity: Decimal,
        rules: HashMap<String, QuantityRule>,
    ) -> Self {
        Self {
            base_budget_unit,
            default_reference_quantity,
            rules,
        }
    }

    pub fn from_catalog(catalog: &RabCatalog) -> Self {
        Self::new(
            catalog.base_budget_unit(),
            catalog.default_reference_quantity(),
            catalog.reference_quantities().clone(),
        )
    }

    /// Rule applied to an item; unknown items scale the default reference.
    pub fn rule_for(&self, item_name: &str) -> QuantityRule {
        self.rules
            .get(item_name)
            .copied()
            .unwrap_or(QuantityRule::Scaled {
                base: self.default_reference_quantity,
            })
    }

    pub fn estimate(&self, total_budget: Decimal, item_name: &str) -> u64 {
        if total_budget <= Decimal::ZERO || self.base_budget_unit <= Decimal::ZERO {
            return 0;
        }
        let scale_factor = total_budget / self.base_budget_unit;

        match self.rule_for(item_name) {
            QuantityRule::Fixed { quantity } => quantity,
            QuantityRule::Scaled { base } => scaled_quantity(item_name, base, scale_factor),
            QuantityRule::AtLeastOne { base } => {
                scaled_quantity(item_name, base, scale_factor).max(1)
            }
        }
    }
}

/// Rounds half-up; saturates at `u64::MAX` instead of overflowing.
fn scaled_quantity(item_name: &str, base: Decimal, scale_factor: Decimal) -> u64 {
    let quantity = base
        .checked_mul(scale_factor)
        .map(|raw| raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_u64());

    match quantity {
        Some(quantity) => quantity,
        None => {
            warn!(
                "Quantity for '{}' exceeds the representable range (base {}, scale {}), clamping to {}",
                item_name,
                base,
                scale_factor,
                u64::MAX
            );
            u64::MAX
        }
    }
}
