use async_trait::async_trait;

use crate::resume::application::domain::entities::ResumeVariant;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeStoreError {
    #[error("IO error: {0}")]
    Io(String),
}

#[async_trait]
pub trait ResumeFileStore: Send + Sync {
    /// Bytes of the first existing candidate, or `None` when no candidate exists.
    async fn load(&self, variant: ResumeVariant) -> Result<Option<Vec<u8>>, ResumeStoreError>;
}
