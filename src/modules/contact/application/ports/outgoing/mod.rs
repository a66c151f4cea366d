mod contact_notifier;
mod contact_submission_store;

pub use contact_notifier::{ContactNotificationError, ContactNotifier};
pub use contact_submission_store::{
    ContactStoreError, ContactSubmissionStore, NewContactSubmission,
};
