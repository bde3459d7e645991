use crate::domain::model::{GeneratedProject, ProjectAnswers};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Paths are relative to the storage root and use `/` separators.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn create_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait ProjectGenerator: Send + Sync {
    /// Runs before anything is written, e.g. to let an external tool create
    /// the project skeleton inside `parent_dir`.
    async fn prepare(&self, _answers: &ProjectAnswers, _parent_dir: &Path) -> Result<()> {
        Ok(())
    }

    /// Whether the scaffolder should create the project directory itself.
    fn creates_own_directory(&self) -> bool {
        false
    }

    async fn generate<S: Storage>(
        &self,
        answers: &ProjectAnswers,
        storage: &S,
    ) -> Result<GeneratedProject>;
}

/// Lists the operations (kebab-case) a JavaScript client package exposes.
#[async_trait]
pub trait OperationSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_operations(&self, package: &str) -> Result<Vec<String>>;
}

/// Creates a native project skeleton with an external tool.
#[async_trait]
pub trait ProjectInitializer: Send + Sync {
    async fn initialize(&self, project_name: &str, parent_dir: &Path) -> Result<()>;
}
