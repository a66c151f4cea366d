use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::outgoing::{ContactNotificationError, ContactNotifier},
};
use crate::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Forwards every stored contact submission to the site owner's inbox.
#[derive(Clone)]
pub struct ContactEmailNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
}

impl fmt::Debug for ContactEmailNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl ContactEmailNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, recipient: &str) -> Self {
        Self {
            sender,
            recipient: recipient.to_string(),
        }
    }

    fn compose(&self, submission: &ContactSubmission) -> OutgoingEmail {
        let body = format!(
            "Name: {}\nEmail: {}\nReceived: {}\n\n{}\n",
            submission.name,
            submission.email,
            submission.created_at.to_rfc3339(),
            submission.message
        );

        let reply_to = Some(submission.email.trim())
            .filter(|email| !email.is_empty())
            .map(str::to_string);

        OutgoingEmail {
            to: self.recipient.clone(),
            subject: format!("New portfolio message from {}", submission.name.trim()),
            body,
            reply_to,
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailNotifier {
    async fn notify(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotificationError> {
        self.sender
            .send_email(self.compose(submission))
            .await
            .map_err(|e| ContactNotificationError::DeliveryFailed(e.to_string()))
    }
}
