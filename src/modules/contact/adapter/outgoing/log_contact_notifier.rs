use async_trait::async_trait;
use tracing::info;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::outgoing::{ContactNotificationError, ContactNotifier},
};

/// Used when no mail relay is configured: the submission only shows up in the logs.
#[derive(Debug, Clone, Default)]
pub struct LogContactNotifier;

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotificationError> {
        info!(
            submission_id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            created_at = %submission.created_at,
            "New contact message: {}",
            submission.message
        );
        Ok(())
    }
}
