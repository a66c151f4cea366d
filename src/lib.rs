pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{contact, content, email, media, resume, site};

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::web;

use crate::contact::{
    adapter::outgoing::InMemoryContactSubmissionStore,
    application::{
        contact_use_cases::ContactUseCases,
        ports::outgoing::ContactNotifier,
        services::{ListContactSubmissionsService, SubmitContactService},
    },
};
use crate::content::{
    adapter::outgoing::ContentFileStore,
    application::{
        content_use_cases::ContentUseCases,
        services::{GetContentDocumentService, LoadPortfolioService, ReplaceContentDocumentService},
    },
};
use crate::media::application::{
    domain::policies::upload_policy::UploadPolicy, media_use_cases::MediaUseCases,
    services::EncodePhotoService,
};
use crate::resume::{
    adapter::outgoing::ResumeDirectoryStore,
    application::{
        domain::entities::ResumeVariant, resume_use_cases::ResumeUseCases,
        services::DownloadResumeService,
    },
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub contact: ContactUseCases,
    pub content: ContentUseCases,
    pub media: MediaUseCases,
    pub resume: ResumeUseCases,
    pub photo_upload_policy: UploadPolicy,
    /// Shown on the "resume not available" page.
    pub resume_assets_dir: String,
}

impl AppState {
    /// Production wiring: file-backed content, in-memory submissions.
    pub fn from_config(config: &AppConfig, notifier: Arc<dyn ContactNotifier + Send + Sync>) -> Self {
        let submission_store = InMemoryContactSubmissionStore::new();
        let content_store = ContentFileStore::new(&config.content_path);
        let mut resume_store =
            ResumeDirectoryStore::new(&config.assets_dir, &config.resume_fallback_dir);
        if let Some(name) = &config.resume_sde_alternate_name {
            resume_store = resume_store.with_alternate_name(ResumeVariant::Sde, name);
        }
        if let Some(name) = &config.resume_ai_alternate_name {
            resume_store = resume_store.with_alternate_name(ResumeVariant::Ai, name);
        }

        Self {
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(submission_store.clone(), notifier)),
                list: Arc::new(ListContactSubmissionsService::new(submission_store)),
            },
            content: ContentUseCases {
                get_document: Arc::new(GetContentDocumentService::new(content_store.clone())),
                replace_document: Arc::new(ReplaceContentDocumentService::new(
                    content_store.clone(),
                )),
                load_portfolio: Arc::new(LoadPortfolioService::new(content_store)),
            },
            media: MediaUseCases {
                encode_photo: Arc::new(EncodePhotoService::new()),
            },
            resume: ResumeUseCases {
                download: Arc::new(DownloadResumeService::new(
                    resume_store,
                    config.resume_download_prefix.clone(),
                )),
            },
            photo_upload_policy: UploadPolicy::new(config.photo_upload_max_bytes),
            resume_assets_dir: config.assets_dir.display().to_string(),
        }
    }
}

/// Body size limits. Documents carry data-URI photos, so both are well above actix defaults.
pub fn init_body_limits(cfg: &mut web::ServiceConfig, limit_bytes: usize) {
    cfg.app_data(custom_json_config(limit_bytes));
    cfg.app_data(web::PayloadConfig::new(limit_bytes));
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API docs
    cfg.service(crate::api::openapi::openapi_json);
    // Page
    cfg.service(crate::site::adapter::incoming::web::routes::render_portfolio_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::search_skills_handler);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_document_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::replace_content_document_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_photo_handler);
    // Resume
    cfg.service(crate::resume::adapter::incoming::web::routes::download_resume_handler);
}
