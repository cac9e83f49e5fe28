use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Budget normalization unit (1 Miliar IDR). Reference quantities are per unit.
pub const BASE_BUDGET_UNIT: i64 = 1_000_000_000;

/// Reference quantity used for items absent from the reference table
pub const DEFAULT_REFERENCE_QUANTITY: i64 = 10;

/// Allowed deviation of the profile multiplier sum from 1.0
pub const MULTIPLIER_TOLERANCE: Decimal = dec!(0.000001);

/// Minimum number of items taken from a category
pub const MIN_ITEMS_PER_CATEGORY: usize = 3;

/// Share of a category's item list taken, in tenths (7 = 70%)
pub const ITEM_SELECTION_TENTHS: usize = 7;

/// Pseudo-category label for profile special items
pub const SPECIAL_ITEMS_LABEL: &str = "Pekerjaan Khusus";

/// Approver label for standard category items
pub const STANDARD_ITEM_APPROVER: &str = "Site Manager";

/// Approver label for special items
pub const SPECIAL_ITEM_APPROVER: &str = "Project Manager";

/// Prefix of generated line item ids
pub const LINE_ITEM_ID_PREFIX: &str = "RAB";
