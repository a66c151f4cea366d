use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactSubmissionsError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ListContactSubmissionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError>;
}
