use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::{
        incoming::use_cases::{ListContactSubmissionsError, ListContactSubmissionsUseCase},
        outgoing::ContactSubmissionStore,
    },
};

#[derive(Debug, Clone)]
pub struct ListContactSubmissionsService<S>
where
    S: ContactSubmissionStore + Send + Sync,
{
    store: S,
}

impl<S> ListContactSubmissionsService<S>
where
    S: ContactSubmissionStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListContactSubmissionsUseCase for ListContactSubmissionsService<S>
where
    S: ContactSubmissionStore + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError> {
        self.store
            .list()
            .await
            .map_err(|e| ListContactSubmissionsError::StoreError(e.to_string()))
    }
}
