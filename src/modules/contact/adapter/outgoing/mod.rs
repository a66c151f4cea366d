mod contact_store_in_memory;
mod log_contact_notifier;

pub use contact_store_in_memory::InMemoryContactSubmissionStore;
pub use log_contact_notifier::LogContactNotifier;
