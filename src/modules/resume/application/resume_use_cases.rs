use std::sync::Arc;

use crate::resume::application::ports::incoming::use_cases::DownloadResumeUseCase;

#[derive(Clone)]
pub struct ResumeUseCases {
    pub download: Arc<dyn DownloadResumeUseCase + Send + Sync>,
}
