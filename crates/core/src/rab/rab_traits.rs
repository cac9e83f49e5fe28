use crate::errors::Result;
use crate::projects::ProjectDescriptor;
use crate::rab::{BudgetRegister, LineItem, RegenerationSummary};
use async_trait::async_trait;

/// Trait for RAB line item storage.
///
/// `replace_project_items` must delete and insert in one transaction so a
/// failure never leaves a partial register behind.
#[async_trait]
pub trait RabRepositoryTrait: Send + Sync {
    async fn replace_project_items(&self, project_id: &str, items: Vec<LineItem>) -> Result<usize>;
    /// Items of a project in their stored display order.
    fn get_project_items(&self, project_id: &str) -> Result<Vec<LineItem>>;
}

/// Trait for RAB service operations
#[async_trait]
pub trait RabServiceTrait: Send + Sync {
    fn preview(&self, project: &ProjectDescriptor) -> Result<BudgetRegister>;
    async fn regenerate_project(&self, project: &ProjectDescriptor) -> Result<BudgetRegister>;
    async fn regenerate_all(&self) -> Result<RegenerationSummary>;
    fn get_register(&self, project_id: &str) -> Result<BudgetRegister>;
}
