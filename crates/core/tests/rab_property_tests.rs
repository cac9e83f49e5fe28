//! Property-based integration tests for RAB generation.
//!
//! These tests check rules that must hold for any budget and any project
//! name, using the `proptest` crate for random test case generation.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rabgen_core::catalog::{RabCatalog, RabConfig};
use rabgen_core::estimation::QuantityEstimator;
use rabgen_core::projects::{classify, ProjectDescriptor, ProjectType};
use rabgen_core::rab::{selection_size, BudgetAllocationEngine};
use rabgen_core::utils::time_utils::FixedClock;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::Arc;

// =============================================================================
// Generators
// =============================================================================

/// Budgets from zero up to one trillion Rupiah, in whole thousands.
fn arb_budget() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|thousands| Decimal::from(thousands) * Decimal::from(1000))
}

/// Project names built from classifier keywords and filler words.
fn arb_project_name() -> impl Strategy<Value = String> {
    let words = prop_oneof![
        Just("Perumahan"),
        Just("Pabrik"),
        Just("Mall"),
        Just("Jembatan"),
        Just("Rumah Sakit"),
        Just("Villa"),
        Just("Gedung"),
        Just("Sentral"),
        Just("Indah"),
    ];
    prop::collection::vec(words, 1..4).prop_map(|parts| parts.join(" "))
}

fn arb_tags() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop_oneof![
            Just("residential".to_string()),
            Just("healthcare".to_string()),
            Just(" Healthcare ".to_string()),
            Just("INDUSTRIAL".to_string()),
            "[a-z]{3,10}",
        ],
        0..3,
    )
}

fn engine() -> BudgetAllocationEngine {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap());
    BudgetAllocationEngine::new(Arc::new(RabCatalog::builtin().unwrap()), Arc::new(clock))
}

fn estimator() -> QuantityEstimator {
    QuantityEstimator::from_catalog(&RabCatalog::builtin().unwrap())
}

fn item_names() -> Vec<String> {
    let config = RabConfig::builtin();
    let mut names: Vec<String> = config.unit_prices.keys().cloned().collect();
    names.push("Item Tanpa Referensi".to_string());
    names
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_estimate_is_monotonic_in_budget(
        a in arb_budget(),
        b in arb_budget(),
        index in 0usize..200,
    ) {
        let estimator = estimator();
        let names = item_names();
        let item = &names[index % names.len()];
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(estimator.estimate(low, item) <= estimator.estimate(high, item));
    }

    #[test]
    fn prop_estimate_is_zero_without_budget(
        negative in -1_000_000_000i64..=0,
        index in 0usize..200,
    ) {
        let estimator = estimator();
        let names = item_names();
        let item = &names[index % names.len()];
        prop_assert_eq!(estimator.estimate(Decimal::from(negative), item), 0);
    }

    #[test]
    fn prop_selection_size_bounds(n in 0usize..500) {
        let k = selection_size(n);
        prop_assert!(k <= n);
        prop_assert!(k >= n.min(3));
        prop_assert!(k * 10 >= n * 7);
    }

    #[test]
    fn prop_classify_is_pure(name in arb_project_name(), tags in arb_tags()) {
        let first = classify(&name, &tags);
        prop_assert_eq!(first, classify(&name, &tags));
        prop_assert!(ProjectType::ALL.contains(&first));
    }

    #[test]
    fn prop_register_rollups_are_exact(
        budget in arb_budget(),
        name in arb_project_name(),
        tags in arb_tags(),
    ) {
        let project = ProjectDescriptor {
            id: "PRJ-PROP".to_string(),
            name,
            tags,
            total_budget: budget,
        };
        let register = engine().generate(&project).unwrap();

        let total: Decimal = register.items.iter().map(|i| i.subtotal).sum();
        let approved: Decimal = register
            .items
            .iter()
            .filter(|i| i.is_approved)
            .map(|i| i.subtotal)
            .sum();
        prop_assert_eq!(register.total_value, total);
        prop_assert_eq!(register.approved_value, approved);
        prop_assert_eq!(register.item_count, register.items.len());
        prop_assert!(register.approved_value <= register.total_value);

        for (index, item) in register.items.iter().enumerate() {
            prop_assert_eq!(item.line_number as usize, index + 1);
            prop_assert_eq!(item.subtotal, Decimal::from(item.quantity) * item.unit_price);
            prop_assert!(item.unit_price > Decimal::ZERO);
        }

        if budget.is_zero() {
            prop_assert!(register.items.is_empty());
        }
    }

    #[test]
    fn prop_generation_is_reproducible(budget in arb_budget(), name in arb_project_name()) {
        let project = ProjectDescriptor::new("PRJ-REPRO", name, budget);
        let first = engine().generate(&project).unwrap();
        let second = engine().generate(&project).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn builtin_multipliers_sum_to_one() {
    let catalog = RabCatalog::builtin().unwrap();
    for project_type in ProjectType::ALL {
        let profile = catalog.get_profile(project_type).unwrap();
        assert_eq!(profile.multiplier_sum(), Decimal::ONE, "{}", project_type);
    }
}
