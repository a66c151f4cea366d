use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

// Input DTO for storing a submission; id and timestamp are assigned by the store
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ContactSubmissionStore: Send + Sync {
    /// Assigns a unique id and creation timestamp, stores and returns the record.
    async fn create(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactStoreError>;

    /// All stored records. Order is whatever the backend iterates in.
    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactStoreError>;
}
