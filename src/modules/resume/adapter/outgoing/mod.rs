mod resume_directory_store;

pub use resume_directory_store::ResumeDirectoryStore;
