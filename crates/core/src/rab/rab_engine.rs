//! Budget allocation engine: turns a project descriptor into a complete,
//! reproducible RAB register.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::{BudgetRegister, CategoryBreakdown, GenerationMetadata, LineItem, SkippedItem};
use crate::approvals::{ApprovalAssigner, ItemKind};
use crate::catalog::RabCatalog;
use crate::constants::{ITEM_SELECTION_TENTHS, MIN_ITEMS_PER_CATEGORY};
use crate::errors::{ConfigurationError, Result, ValidationError};
use crate::estimation::QuantityEstimator;
use crate::projects::{classify, ProjectDescriptor, ProjectType};
use crate::utils::format_utils::{format_miliar, format_rupiah};
use crate::utils::time_utils::Clock;

/// Number of leading items taken from a category list of `item_count` items.
pub fn selection_size(item_count: usize) -> usize {
    let proportional = (item_count * ITEM_SELECTION_TENTHS).div_ceil(10);
    proportional.max(MIN_ITEMS_PER_CATEGORY).min(item_count)
}

pub struct BudgetAllocationEngine {
    catalog: Arc<RabCatalog>,
    estimator: QuantityEstimator,
    approvals: ApprovalAssigner,
    clock: Arc<dyn Clock>,
}

/// Mutable state of a single generation run.
struct RegisterDraft<'a> {
    project: &'a ProjectDescriptor,
    project_type: ProjectType,
    generated_at: DateTime<Utc>,
    items: Vec<LineItem>,
    skipped: Vec<SkippedItem>,
}

impl RegisterDraft<'_> {
    fn next_line_number(&self) -> u32 {
        self.items.len() as u32 + 1
    }
}

impl BudgetAllocationEngine {
    pub fn new(catalog: Arc<RabCatalog>, clock: Arc<dyn Clock>) -> Self {
        let estimator = QuantityEstimator::from_catalog(&catalog);
        let approvals = ApprovalAssigner::new(catalog.approval_policy());
        Self {
            catalog,
            estimator,
            approvals,
            clock,
        }
    }

    /// Generates the full replacement register for a project.
    pub fn generate(&self, project: &ProjectDescriptor) -> Result<BudgetRegister> {
        if project.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        let project_type = classify(&project.name, &project.tags);
        let profile = self.catalog.get_profile(project_type)?;
        let generated_at = self.clock.now();
        let mut metadata = GenerationMetadata::new(project_type, project.total_budget, generated_at);

        info!(
            "Generating RAB for '{}' ({}), type {}, budget {}",
            project.name,
            project.id,
            project_type,
            format_miliar(project.total_budget)
        );

        if project.total_budget <= Decimal::ZERO {
            warn!(
                "Project '{}' has a non-positive budget, returning an empty register",
                project.id
            );
            return Ok(BudgetRegister::empty(&project.id).with_metadata(metadata));
        }

        let mut draft = RegisterDraft {
            project,
            project_type,
            generated_at,
            items: Vec::new(),
            skipped: Vec::new(),
        };

        for category_key in &profile.categories {
            let category = self.catalog.category(category_key).ok_or_else(|| {
                ConfigurationError::UnknownCategory {
                    project_type,
                    category: category_key.clone(),
                }
            })?;
            let allocated_budget = project.total_budget * profile.multiplier(category_key);
            debug!(
                "{}: allocated {}",
                category.display_name,
                format_rupiah(allocated_budget)
            );

            let first = draft.items.len();
            let selected = &category.items[..selection_size(category.items.len())];
            for item_name in selected {
                self.push_item(&mut draft, &category.display_name, item_name, ItemKind::Standard);
            }
            metadata.categories.push(breakdown(
                Some(category_key.clone()),
                &category.display_name,
                Some(allocated_budget),
                &draft.items[first..],
            ));
        }

        if !profile.special_items.is_empty() {
            let label = self.catalog.special_items_label();
            let first = draft.items.len();
            for item_name in &profile.special_items {
                self.push_item(&mut draft, label, item_name, ItemKind::Special);
            }
            metadata
                .categories
                .push(breakdown(None, label, None, &draft.items[first..]));
        }

        for item in draft.items.iter_mut() {
            let state = self.approvals.assign(item, generated_at);
            item.apply_approval(state);
        }

        metadata.skipped_items = draft.skipped;
        let register = BudgetRegister::from_items(&project.id, draft.items).with_metadata(metadata);

        info!(
            "Generated {} RAB items for '{}': total {}, approved {}/{} ({})",
            register.item_count,
            project.id,
            format_rupiah(register.total_value),
            register.approved_count(),
            register.item_count,
            format_rupiah(register.approved_value)
        );
        Ok(register)
    }

    /// Prices one item and appends it, or records it as skipped when the
    /// catalog has no unit price for it.
    fn push_item(&self, draft: &mut RegisterDraft<'_>, category: &str, item_name: &str, kind: ItemKind) {
        let Some(unit_price) = self.catalog.unit_price(item_name) else {
            warn!(
                "No unit price for '{}' ({}), skipping it for project {}",
                item_name, category, draft.project.id
            );
            draft.skipped.push(SkippedItem {
                category: category.to_string(),
                item_name: item_name.to_string(),
            });
            return;
        };

        let quantity = self.estimator.estimate(draft.project.total_budget, item_name);
        let subtotal = Decimal::from(quantity) * unit_price.price;
        let line_number = draft.next_line_number();
        let (description, notes) = match kind {
            ItemKind::Standard => (
                format!("{} sesuai spesifikasi teknis dan SNI", item_name),
                "Termasuk material, upah, dan alat".to_string(),
            ),
            ItemKind::Special => (
                format!("{} sesuai kebutuhan proyek", item_name),
                format!("Item khusus untuk proyek {}", draft.project_type),
            ),
        };

        draft.items.push(LineItem {
            id: LineItem::line_item_id(&draft.project.id, line_number),
            project_id: draft.project.id.clone(),
            line_number,
            kind,
            category: category.to_string(),
            item_name: item_name.to_string(),
            description,
            unit: unit_price.unit.clone(),
            quantity,
            unit_price: unit_price.price,
            subtotal,
            notes,
            is_approved: false,
            approved_by: None,
            approved_date: None,
            created_at: draft.generated_at,
            updated_at: draft.generated_at,
        });
    }
}

fn breakdown(
    category_key: Option<String>,
    category_name: &str,
    allocated_budget: Option<Decimal>,
    items: &[LineItem],
) -> CategoryBreakdown {
    CategoryBreakdown {
        category_key,
        category_name: category_name.to_string(),
        allocated_budget,
        realized_value: items.iter().map(|item| item.subtotal).sum(),
        item_count: items.len(),
    }
}
