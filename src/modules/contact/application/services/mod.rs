mod list_contact_submissions_service;
mod submit_contact_service;

pub use list_contact_submissions_service::ListContactSubmissionsService;
pub use submit_contact_service::SubmitContactService;
