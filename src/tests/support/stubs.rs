use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::incoming::use_cases::{
        ListContactSubmissionsError, ListContactSubmissionsUseCase, SubmitContactCommand,
        SubmitContactError, SubmitContactUseCase,
    },
};
use crate::content::application::{
    domain::entities::PortfolioContent,
    ports::incoming::use_cases::{
        GetContentDocumentError, GetContentDocumentUseCase, LoadPortfolioError,
        LoadPortfolioUseCase, ReplaceContentDocumentCommand, ReplaceContentDocumentError,
        ReplaceContentDocumentUseCase,
    },
};
use crate::media::application::{
    domain::entities::PhotoDataUri,
    ports::incoming::use_cases::{EncodePhotoCommand, EncodePhotoUseCase},
};
use crate::resume::application::{
    domain::entities::{ResumeDownload, ResumeVariant},
    ports::incoming::use_cases::{DownloadResumeError, DownloadResumeUseCase},
};

// ============================================================
// Contact
// ============================================================

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError> {
        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            created_at: Utc::now(),
        })
    }
}

#[derive(Default, Clone)]
pub struct StubListContactSubmissionsUseCase;

#[async_trait]
impl ListContactSubmissionsUseCase for StubListContactSubmissionsUseCase {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError> {
        Ok(vec![])
    }
}

// ============================================================
// Content
// ============================================================

#[derive(Clone)]
pub struct StubGetContentDocumentUseCase {
    result: Result<Vec<u8>, GetContentDocumentError>,
}

impl StubGetContentDocumentUseCase {
    pub fn found(document: &[u8]) -> Self {
        Self {
            result: Ok(document.to_vec()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetContentDocumentError::NotFound),
        }
    }
}

#[async_trait]
impl GetContentDocumentUseCase for StubGetContentDocumentUseCase {
    async fn execute(&self) -> Result<Vec<u8>, GetContentDocumentError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubReplaceContentDocumentUseCase;

#[async_trait]
impl ReplaceContentDocumentUseCase for StubReplaceContentDocumentUseCase {
    async fn execute(
        &self,
        _command: ReplaceContentDocumentCommand,
    ) -> Result<(), ReplaceContentDocumentError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct StubLoadPortfolioUseCase {
    result: Result<PortfolioContent, LoadPortfolioError>,
}

impl StubLoadPortfolioUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(LoadPortfolioError::NotFound),
        }
    }
}

#[async_trait]
impl LoadPortfolioUseCase for StubLoadPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioContent, LoadPortfolioError> {
        self.result.clone()
    }
}

// ============================================================
// Media
// ============================================================

#[derive(Default, Clone)]
pub struct StubEncodePhotoUseCase;

#[async_trait]
impl EncodePhotoUseCase for StubEncodePhotoUseCase {
    async fn execute(&self, command: EncodePhotoCommand) -> PhotoDataUri {
        PhotoDataUri::encode(command.mime_type(), &[])
    }
}

// ============================================================
// Resume
// ============================================================

#[derive(Default, Clone)]
pub struct StubDownloadResumeUseCase;

#[async_trait]
impl DownloadResumeUseCase for StubDownloadResumeUseCase {
    async fn execute(&self, variant: ResumeVariant) -> Result<ResumeDownload, DownloadResumeError> {
        Err(DownloadResumeError::NotAvailable(variant))
    }
}
