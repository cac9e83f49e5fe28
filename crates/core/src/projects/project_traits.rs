use crate::errors::Result;
use crate::projects::ProjectDescriptor;
use async_trait::async_trait;

/// Source of project descriptors for batch regeneration.
#[async_trait]
pub trait ProjectSourceTrait: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectDescriptor>>;
}
