use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

//
// ──────────────────────────────────────────────────────────
// Submit Contact Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitContactCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl SubmitContactCommand {
    /// `email` is accepted as any string; name and message must have visible content.
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, SubmitContactCommandError> {
        if name.trim().is_empty() {
            return Err(SubmitContactCommandError::EmptyName);
        }

        if message.trim().is_empty() {
            return Err(SubmitContactCommandError::EmptyMessage);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError>;
}
