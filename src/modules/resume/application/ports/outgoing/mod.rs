mod resume_file_store;

pub use resume_file_store::{ResumeFileStore, ResumeStoreError};
