use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::{
        incoming::use_cases::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
        outgoing::{ContactNotifier, ContactSubmissionStore, NewContactSubmission},
    },
};

#[derive(Clone)]
pub struct SubmitContactService<S>
where
    S: ContactSubmissionStore + Send + Sync,
{
    store: S,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
}

impl<S> SubmitContactService<S>
where
    S: ContactSubmissionStore + Send + Sync,
{
    pub fn new(store: S, notifier: Arc<dyn ContactNotifier + Send + Sync>) -> Self {
        Self { store, notifier }
    }
}

#[async_trait]
impl<S> SubmitContactUseCase for SubmitContactService<S>
where
    S: ContactSubmissionStore + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError> {
        let data = NewContactSubmission {
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
        };

        let submission = self
            .store
            .create(data)
            .await
            .map_err(|e| SubmitContactError::StoreError(e.to_string()))?;

        info!(
            submission_id = %submission.id,
            email = %submission.email,
            "Contact form submission stored"
        );

        // The submission is already stored; a failed notification only gets logged.
        if let Err(e) = self.notifier.notify(&submission).await {
            warn!(submission_id = %submission.id, "Contact notification failed: {}", e);
        }

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::contact::application::ports::outgoing::{
        ContactNotificationError, ContactStoreError,
    };

    // ──────────────────────────────────────────────────────────
    // Mock Store / Notifier
    // ──────────────────────────────────────────────────────────

    #[derive(Clone)]
    struct MockStore {
        fail_with: Option<String>,
    }

    #[async_trait]
    impl ContactSubmissionStore for MockStore {
        async fn create(
            &self,
            data: NewContactSubmission,
        ) -> Result<ContactSubmission, ContactStoreError> {
            match &self.fail_with {
                Some(msg) => Err(ContactStoreError::StorageError(msg.clone())),
                None => Ok(ContactSubmission {
                    id: Uuid::new_v4(),
                    name: data.name,
                    email: data.email,
                    message: data.message,
                    created_at: Utc::now(),
                }),
            }
        }

        async fn list(&self) -> Result<Vec<ContactSubmission>, ContactStoreError> {
            unimplemented!("Not used in submit tests")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        fail: bool,
        seen: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl ContactNotifier for RecordingNotifier {
        async fn notify(
            &self,
            submission: &ContactSubmission,
        ) -> Result<(), ContactNotificationError> {
            self.seen.lock().unwrap().push(submission.id);
            if self.fail {
                Err(ContactNotificationError::DeliveryFailed("smtp down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn command() -> SubmitContactCommand {
        SubmitContactCommand::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Hello".to_string(),
        )
        .unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn stores_and_notifies() {
        // Arrange
        let notifier = Arc::new(RecordingNotifier::default());
        let service = SubmitContactService::new(MockStore { fail_with: None }, notifier.clone());

        // Act
        let result = service.execute(command()).await;

        // Assert
        let submission = result.expect("submission should be stored");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.message, "Hello");
        assert_eq!(*notifier.seen.lock().unwrap(), vec![submission.id]);
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_submission() {
        let notifier = Arc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let service = SubmitContactService::new(MockStore { fail_with: None }, notifier);

        let result = service.execute(command()).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
    }

    #[tokio::test]
    async fn store_error_is_mapped_and_skips_notification() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = SubmitContactService::new(
            MockStore {
                fail_with: Some("disk full".to_string()),
            },
            notifier.clone(),
        );

        let result = service.execute(command()).await;

        match result {
            Err(SubmitContactError::StoreError(msg)) => assert!(msg.contains("disk full")),
            other => panic!("Expected StoreError, got {:?}", other),
        }
        assert!(notifier.seen.lock().unwrap().is_empty());
    }
}
