pub mod download_resume;

pub use download_resume::download_resume_handler;
