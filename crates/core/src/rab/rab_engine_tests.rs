#[cfg(test)]
mod tests {
    use crate::approvals::{ApprovalPolicy, ItemKind};
    use crate::catalog::{RabCatalog, RabConfig};
    use crate::errors::{Error, ValidationError};
    use crate::projects::{ProjectDescriptor, ProjectType};
    use crate::rab::{selection_size, BudgetAllocationEngine, BudgetRegister, LineItem};
    use crate::utils::time_utils::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()
    }

    fn engine_with(config: RabConfig) -> BudgetAllocationEngine {
        let catalog = RabCatalog::load(config).unwrap();
        BudgetAllocationEngine::new(Arc::new(catalog), Arc::new(FixedClock(generated_at())))
    }

    fn engine() -> BudgetAllocationEngine {
        engine_with(RabConfig::builtin())
    }

    fn green_valley() -> ProjectDescriptor {
        ProjectDescriptor::new("PRJ-001", "Perumahan Green Valley", dec!(15000000000))
    }

    fn items_in<'a>(register: &'a BudgetRegister, category: &str) -> Vec<&'a LineItem> {
        register
            .items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    fn find<'a>(register: &'a BudgetRegister, item_name: &str) -> &'a LineItem {
        register
            .items
            .iter()
            .find(|item| item.item_name == item_name)
            .unwrap_or_else(|| panic!("{item_name} not generated"))
    }

    // ==================== Selection ====================

    #[test]
    fn test_selection_size() {
        assert_eq!(selection_size(0), 0);
        assert_eq!(selection_size(1), 1);
        assert_eq!(selection_size(3), 3);
        assert_eq!(selection_size(4), 3);
        assert_eq!(selection_size(5), 4);
        assert_eq!(selection_size(7), 5);
        assert_eq!(selection_size(8), 6);
        assert_eq!(selection_size(10), 7);
        assert_eq!(selection_size(12), 9);
    }

    #[test]
    fn test_selection_takes_leading_items_in_order() {
        let register = engine().generate(&green_valley()).unwrap();
        let preparation: Vec<&str> = items_in(&register, "Pekerjaan Persiapan")
            .iter()
            .map(|item| item.item_name.as_str())
            .collect();
        assert_eq!(
            preparation,
            vec![
                "Mobilisasi dan Demobilisasi",
                "Pagar Pengaman Proyek",
                "Kantor dan Gudang Sementara",
                "Papan Nama Proyek",
                "Bongkar Bangunan Lama",
                "Pembersihan Lahan",
            ]
        );
    }

    // ==================== End to end ====================

    #[test]
    fn test_residential_project_end_to_end() {
        let register = engine().generate(&green_valley()).unwrap();
        let metadata = register.metadata.as_ref().unwrap();

        assert_eq!(metadata.project_type, ProjectType::Residential);
        assert!(items_in(&register, "Pekerjaan Arsitektur").len() >= 6);
        assert_eq!(items_in(&register, "Pekerjaan Arsitektur").len(), 7);

        let specials: Vec<&str> = register
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Special)
            .map(|item| item.item_name.as_str())
            .collect();
        assert_eq!(
            specials,
            vec!["Carport", "Pagar Rumah", "Taman Depan", "Water Heater Solar"]
        );

        // 6 + 5 + 6 + 6 + 7 + 7 + 9 + 5 category items, 4 special items
        assert_eq!(register.item_count, 55);
        assert!(metadata.skipped_items.is_empty());
    }

    #[test]
    fn test_line_items_are_priced_and_numbered() {
        let register = engine().generate(&green_valley()).unwrap();

        let first = &register.items[0];
        assert_eq!(first.id, "RAB-PRJ-001-001");
        assert_eq!(first.line_number, 1);
        assert_eq!(first.item_name, "Mobilisasi dan Demobilisasi");
        assert_eq!(first.unit, "ls");
        assert_eq!(first.quantity, 1);
        assert_eq!(first.subtotal, dec!(25000000));
        assert_eq!(
            first.description,
            "Mobilisasi dan Demobilisasi sesuai spesifikasi teknis dan SNI"
        );
        assert_eq!(first.notes, "Termasuk material, upah, dan alat");
        assert_eq!(first.created_at, generated_at());

        let fence = find(&register, "Pagar Pengaman Proyek");
        assert_eq!(fence.quantity, 3000);
        assert_eq!(fence.subtotal, dec!(555000000));

        let carport = find(&register, "Carport");
        assert_eq!(carport.category, "Pekerjaan Khusus");
        assert_eq!(carport.quantity, 150);
        assert_eq!(carport.subtotal, dec!(277500000));
        assert_eq!(carport.description, "Carport sesuai kebutuhan proyek");
        assert_eq!(carport.notes, "Item khusus untuk proyek residential");

        for (index, item) in register.items.iter().enumerate() {
            assert_eq!(item.line_number as usize, index + 1);
            assert_eq!(item.id, LineItem::line_item_id("PRJ-001", item.line_number));
            assert_eq!(item.subtotal, Decimal::from(item.quantity) * item.unit_price);
        }
    }

    #[test]
    fn test_categories_follow_profile_order() {
        let register = engine().generate(&green_valley()).unwrap();
        let mut order: Vec<&str> = Vec::new();
        for item in &register.items {
            if order.last() != Some(&item.category.as_str()) {
                order.push(item.category.as_str());
            }
        }
        assert_eq!(
            order,
            vec![
                "Pekerjaan Persiapan",
                "Pekerjaan Tanah",
                "Pekerjaan Pondasi",
                "Pekerjaan Struktur",
                "Pekerjaan Arsitektur",
                "Pekerjaan Mekanikal",
                "Pekerjaan Elektrikal",
                "Pekerjaan Lansekap",
                "Pekerjaan Khusus",
            ]
        );
    }

    #[test]
    fn test_category_breakdown_is_descriptive() {
        let register = engine().generate(&green_valley()).unwrap();
        let metadata = register.metadata.as_ref().unwrap();
        assert_eq!(metadata.categories.len(), 9);

        let architecture = metadata
            .categories
            .iter()
            .find(|c| c.category_key.as_deref() == Some("architecture"))
            .unwrap();
        assert_eq!(architecture.allocated_budget, Some(dec!(5250000000)));
        assert_eq!(architecture.item_count, 7);
        let by_category = register.value_by_category();
        assert_eq!(
            architecture.realized_value,
            by_category["Pekerjaan Arsitektur"]
        );

        let specials = metadata.categories.last().unwrap();
        assert_eq!(specials.category_key, None);
        assert_eq!(specials.allocated_budget, None);
        assert_eq!(specials.item_count, 4);

        let realized: Decimal = metadata.categories.iter().map(|c| c.realized_value).sum();
        assert_eq!(realized, register.total_value);
    }

    // ==================== Guards and edge cases ====================

    #[test]
    fn test_zero_budget_returns_empty_register() {
        let project = ProjectDescriptor::new("PRJ-000", "Perumahan Kosong", Decimal::ZERO);
        let register = engine().generate(&project).unwrap();
        assert_eq!(register.item_count, 0);
        assert_eq!(register.total_value, Decimal::ZERO);
        assert_eq!(register.approved_value, Decimal::ZERO);
        assert!(register.items.is_empty());

        let metadata = register.metadata.unwrap();
        assert_eq!(metadata.project_type, ProjectType::Residential);
        assert!(metadata.categories.is_empty());
    }

    #[test]
    fn test_blank_project_id_is_rejected() {
        for id in ["", "   "] {
            let project = ProjectDescriptor::new(id, "Perumahan Green Valley", dec!(15000000000));
            match engine().generate(&project) {
                Err(Error::Validation(e)) => {
                    assert_eq!(e, ValidationError::MissingField("id".to_string()))
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_budget_returns_empty_register() {
        let project = ProjectDescriptor::new("PRJ-NEG", "Pabrik Gula", dec!(-1000000));
        let register = engine().generate(&project).unwrap();
        assert!(register.is_empty());
        assert_eq!(register.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_small_budget_keeps_required_items() {
        let project = ProjectDescriptor::new("PRJ-S", "Villa Mungil", dec!(100000000));
        let register = engine().generate(&project).unwrap();

        assert_eq!(find(&register, "Septic Tank").quantity, 1);
        assert_eq!(find(&register, "Pompa Air").quantity, 1);
        assert_eq!(find(&register, "Mobilisasi dan Demobilisasi").quantity, 1);
        // 4 × 0.1 rounds to zero and has no floor
        let hydrant = find(&register, "Fire Hydrant System");
        assert_eq!(hydrant.quantity, 0);
        assert_eq!(hydrant.subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_catalog_miss_is_skipped_and_reported() {
        let mut config = RabConfig::builtin();
        config.allow_unpriced_items = true;
        config.unit_prices.remove("Carport");
        config.unit_prices.remove("Pagar Pengaman Proyek");

        let register = engine_with(config).generate(&green_valley()).unwrap();
        let metadata = register.metadata.as_ref().unwrap();

        assert_eq!(register.item_count, 53);
        assert_eq!(metadata.skipped_count(), 2);
        assert_eq!(metadata.skipped_items[0].item_name, "Pagar Pengaman Proyek");
        assert_eq!(metadata.skipped_items[0].category, "Pekerjaan Persiapan");
        assert_eq!(metadata.skipped_items[1].item_name, "Carport");
        assert_eq!(metadata.skipped_items[1].category, "Pekerjaan Khusus");
        assert!(register.items.iter().all(|i| i.item_name != "Carport"));

        // Numbering stays contiguous across skipped items
        assert_eq!(register.items[1].item_name, "Kantor dan Gudang Sementara");
        assert_eq!(register.items[1].id, "RAB-PRJ-001-002");
    }

    #[test]
    fn test_commercial_default_includes_specialty_and_special_items() {
        let project = ProjectDescriptor::new("PRJ-C", "Gedung Serbaguna", dec!(8000000000));
        let register = engine().generate(&project).unwrap();
        let metadata = register.metadata.as_ref().unwrap();
        assert_eq!(metadata.project_type, ProjectType::Commercial);

        let khusus = items_in(&register, "Pekerjaan Khusus");
        // 6 specialty category items followed by 5 special items
        assert_eq!(khusus.len(), 11);
        assert_eq!(khusus[0].kind, ItemKind::Standard);
        assert_eq!(khusus[0].item_name, "Lift Passenger");
        assert_eq!(khusus[6].kind, ItemKind::Special);
        assert_eq!(khusus[6].item_name, "Escalator 2 Lantai");
    }

    // ==================== Approvals and rollups ====================

    #[test]
    fn test_rollups_are_exact() {
        let register = engine().generate(&green_valley()).unwrap();
        let total: Decimal = register.items.iter().map(|i| i.subtotal).sum();
        let approved: Decimal = register
            .items
            .iter()
            .filter(|i| i.is_approved)
            .map(|i| i.subtotal)
            .sum();
        assert_eq!(register.total_value, total);
        assert_eq!(register.approved_value, approved);
        assert_eq!(register.item_count, register.items.len());
        assert!(register.approved_value <= register.total_value);
    }

    #[test]
    fn test_approved_items_carry_approver_and_date() {
        let register = engine().generate(&green_valley()).unwrap();
        assert!(register.approved_count() > 0);
        for item in &register.items {
            if item.is_approved {
                let expected = match item.kind {
                    ItemKind::Standard => "Site Manager",
                    ItemKind::Special => "Project Manager",
                };
                assert_eq!(item.approved_by.as_deref(), Some(expected));
                assert_eq!(item.approved_date, Some(generated_at()));
            } else {
                assert_eq!(item.approved_by, None);
                assert_eq!(item.approved_date, None);
            }
        }
    }

    #[test]
    fn test_pending_policy_approves_nothing() {
        let mut config = RabConfig::builtin();
        config.approval_policy = ApprovalPolicy::Pending;
        let register = engine_with(config).generate(&green_valley()).unwrap();
        assert_eq!(register.approved_count(), 0);
        assert_eq!(register.approved_value, Decimal::ZERO);
        assert!(register.total_value > Decimal::ZERO);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let first = engine().generate(&green_valley()).unwrap();
        let second = engine().generate(&green_valley()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_tags_drive_classification() {
        let project = ProjectDescriptor::new("PRJ-T", "Proyek Terpadu", dec!(5000000000))
            .with_tags(["healthcare"]);
        let register = engine().generate(&project).unwrap();
        assert_eq!(
            register.metadata.as_ref().unwrap().project_type,
            ProjectType::Healthcare
        );
        assert!(register
            .items
            .iter()
            .any(|item| item.item_name == "Medical Gas System"));
    }
}
