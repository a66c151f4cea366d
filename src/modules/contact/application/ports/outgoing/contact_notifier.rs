use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission)
        -> Result<(), ContactNotificationError>;
}
