mod list_contact_submissions;
mod submit_contact;

pub use list_contact_submissions::{ListContactSubmissionsError, ListContactSubmissionsUseCase};
pub use submit_contact::{
    SubmitContactCommand, SubmitContactCommandError, SubmitContactError, SubmitContactUseCase,
};
