use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::join_all;
use log::{debug, error, info};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use super::{
    BudgetAllocationEngine, BudgetRegister, FailedProject, RabRepositoryTrait, RabServiceTrait,
    RegenerationSummary,
};
use crate::errors::Result;
use crate::projects::{classify, ProjectDescriptor, ProjectSourceTrait};
use crate::utils::format_utils::format_rupiah;

/// Generates RAB registers and hands them to the repository as full
/// replacements, one project at a time per project id.
pub struct RabService {
    engine: Arc<BudgetAllocationEngine>,
    project_source: Arc<dyn ProjectSourceTrait>,
    repository: Arc<dyn RabRepositoryTrait>,
    project_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RabService {
    pub fn new(
        engine: Arc<BudgetAllocationEngine>,
        project_source: Arc<dyn ProjectSourceTrait>,
        repository: Arc<dyn RabRepositoryTrait>,
    ) -> Self {
        Self {
            engine,
            project_source,
            repository,
            project_locks: DashMap::new(),
        }
    }

    fn project_lock(&self, project_id: &str) -> Arc<Mutex<()>> {
        self.project_locks
            .entry(project_id.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Drops the lock entry once no caller holds or waits on it.
    fn release_project_lock(&self, project_id: &str, lock: Arc<Mutex<()>>) {
        drop(lock);
        self.project_locks
            .remove_if(project_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    #[cfg(test)]
    pub(crate) fn tracked_project_locks(&self) -> usize {
        self.project_locks.len()
    }

    async fn replace_locked(
        &self,
        project: &ProjectDescriptor,
        lock: &Mutex<()>,
    ) -> Result<BudgetRegister> {
        let _guard = lock.lock().await;

        let register = self.engine.generate(project)?;
        let written = self
            .repository
            .replace_project_items(&project.id, register.items.clone())
            .await?;
        debug!(
            "Replaced RAB items for project {}: {} rows written",
            project.id, written
        );
        Ok(register)
    }
}

#[async_trait]
impl RabServiceTrait for RabService {
    fn preview(&self, project: &ProjectDescriptor) -> Result<BudgetRegister> {
        self.engine.generate(project)
    }

    async fn regenerate_project(&self, project: &ProjectDescriptor) -> Result<BudgetRegister> {
        let lock = self.project_lock(&project.id);
        let result = self.replace_locked(project, &lock).await;
        self.release_project_lock(&project.id, lock);
        result
    }

    async fn regenerate_all(&self) -> Result<RegenerationSummary> {
        let projects = self.project_source.list_projects().await?;
        info!("Regenerating RAB for {} projects", projects.len());

        let results = join_all(projects.iter().map(|p| self.regenerate_project(p))).await;

        let mut summary = RegenerationSummary {
            projects_processed: projects.len(),
            ..Default::default()
        };

        for (project, result) in projects.iter().zip(results) {
            let project_type = classify(&project.name, &project.tags);
            let type_summary = summary.by_project_type.entry(project_type).or_default();
            type_summary.project_count += 1;
            type_summary.total_budget += project.total_budget;

            match result {
                Ok(register) => {
                    type_summary.total_value += register.total_value;
                    summary.projects_succeeded += 1;
                    summary.total_items += register.item_count;
                    summary.total_value += register.total_value;
                }
                Err(e) => {
                    error!("Failed to regenerate RAB for project {}: {}", project.id, e);
                    summary.failed_projects.push(FailedProject {
                        project_id: project.id.clone(),
                        project_name: project.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        if summary.projects_succeeded > 0 {
            summary.average_value_per_project = (summary.total_value
                / Decimal::from(summary.projects_succeeded))
            .round_dp(2);
        }

        info!(
            "RAB regeneration complete: {}/{} projects, {} items, total {}",
            summary.projects_succeeded,
            summary.projects_processed,
            summary.total_items,
            format_rupiah(summary.total_value)
        );
        Ok(summary)
    }

    fn get_register(&self, project_id: &str) -> Result<BudgetRegister> {
        let items = self.repository.get_project_items(project_id)?;
        Ok(BudgetRegister::from_items(project_id, items))
    }
}
