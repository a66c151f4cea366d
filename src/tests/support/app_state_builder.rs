use std::sync::Arc;

use actix_web::web;

use crate::contact::application::{
    contact_use_cases::ContactUseCases,
    ports::incoming::use_cases::SubmitContactUseCase,
};
use crate::content::application::{
    content_use_cases::ContentUseCases,
    ports::incoming::use_cases::{
        GetContentDocumentUseCase, LoadPortfolioUseCase, ReplaceContentDocumentUseCase,
    },
};
use crate::media::application::{
    domain::policies::upload_policy::UploadPolicy, media_use_cases::MediaUseCases,
    ports::incoming::use_cases::EncodePhotoUseCase,
};
use crate::resume::application::{
    ports::incoming::use_cases::DownloadResumeUseCase, resume_use_cases::ResumeUseCases,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a harmless stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    contact: ContactUseCases,
    content: ContentUseCases,
    media: MediaUseCases,
    resume: ResumeUseCases,
    photo_upload_policy: UploadPolicy,
    resume_assets_dir: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase),
                list: Arc::new(StubListContactSubmissionsUseCase),
            },
            content: ContentUseCases {
                get_document: Arc::new(StubGetContentDocumentUseCase::not_found()),
                replace_document: Arc::new(StubReplaceContentDocumentUseCase),
                load_portfolio: Arc::new(StubLoadPortfolioUseCase::not_found()),
            },
            media: MediaUseCases {
                encode_photo: Arc::new(StubEncodePhotoUseCase),
            },
            resume: ResumeUseCases {
                download: Arc::new(StubDownloadResumeUseCase),
            },
            photo_upload_policy: UploadPolicy::default(),
            resume_assets_dir: "attached_assets".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    // Contact
    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    // Content
    pub fn with_get_content_document(
        mut self,
        uc: impl GetContentDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.get_document = Arc::new(uc);
        self
    }

    pub fn with_replace_content_document(
        mut self,
        uc: impl ReplaceContentDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.replace_document = Arc::new(uc);
        self
    }

    pub fn with_load_portfolio(
        mut self,
        uc: impl LoadPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.load_portfolio = Arc::new(uc);
        self
    }

    // Media
    pub fn with_encode_photo(mut self, uc: impl EncodePhotoUseCase + Send + Sync + 'static) -> Self {
        self.media.encode_photo = Arc::new(uc);
        self
    }

    pub fn with_photo_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.photo_upload_policy = policy;
        self
    }

    // Resume
    pub fn with_download_resume(
        mut self,
        uc: impl DownloadResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.download = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            contact: self.contact,
            content: self.content,
            media: self.media,
            resume: self.resume,
            photo_upload_policy: self.photo_upload_policy,
            resume_assets_dir: self.resume_assets_dir,
        })
    }
}
