mod download_resume_service;

pub use download_resume_service::DownloadResumeService;
