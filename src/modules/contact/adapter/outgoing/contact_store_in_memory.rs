use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::outgoing::{ContactStoreError, ContactSubmissionStore, NewContactSubmission},
};

/// Process-lifetime submission store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactSubmissionStore {
    submissions: Arc<RwLock<HashMap<Uuid, ContactSubmission>>>,
}

impl InMemoryContactSubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactSubmissionStore for InMemoryContactSubmissionStore {
    async fn create(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactStoreError> {
        let submission = ContactSubmission {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            message: data.message,
            created_at: Utc::now(),
        };

        self.submissions
            .write()
            .await
            .insert(submission.id, submission.clone());

        Ok(submission)
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactStoreError> {
        Ok(self.submissions.read().await.values().cloned().collect())
    }
}
