//! Estimation module - budget-scaled line item quantities.

mod quantity_estimator;

pub use quantity_estimator::QuantityEstimator;
