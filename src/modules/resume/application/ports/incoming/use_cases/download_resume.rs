use async_trait::async_trait;

use crate::resume::application::domain::entities::{ResumeDownload, ResumeVariant};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadResumeError {
    #[error("No {0} resume has been added")]
    NotAvailable(ResumeVariant),

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait DownloadResumeUseCase: Send + Sync {
    async fn execute(&self, variant: ResumeVariant) -> Result<ResumeDownload, DownloadResumeError>;
}
