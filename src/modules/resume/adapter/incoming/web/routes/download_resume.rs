use actix_web::{
    get,
    http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType},
    web, HttpResponse, Responder,
};
use askama::Template;
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    resume::application::{
        domain::entities::ResumeVariant,
        ports::incoming::use_cases::DownloadResumeError,
    },
    shared::api::ApiResponse,
    AppState,
};

pub const RESUME_NOT_FOUND: &str = "Resume not found";
pub const DOWNLOAD_FAILED: &str = "Failed to download resume";

/// Instructions shown when no file exists for a variant.
#[derive(Template)]
#[template(path = "resume_not_available.html")]
struct ResumeNotAvailablePage<'a> {
    label: &'a str,
    canonical_file_name: &'a str,
    accent_color: &'a str,
    assets_dir: &'a str,
}

/// Download a resume PDF
#[utoipa::path(
    get,
    path = "/api/resume/{variant}",
    tag = "resume",
    params(("variant" = String, Path, description = "`sde` or `ai`")),
    responses(
        (status = 200, description = "PDF attachment (application/pdf)"),
        (status = 404, description = "Unknown variant (JSON) or no file added yet (HTML)",
            body = ErrorResponse),
        (status = 500, description = "Read failure", body = ErrorResponse,
            example = json!({ "success": false, "error": "Failed to download resume" })),
    )
)]
#[get("/api/resume/{variant}")]
pub async fn download_resume_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let variant: ResumeVariant = match path.into_inner().parse() {
        Ok(v) => v,
        Err(_) => return ApiResponse::not_found(RESUME_NOT_FOUND),
    };

    match data.resume.download.execute(variant).await {
        Ok(download) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(download.download_name)],
            })
            .body(download.bytes),
        Err(DownloadResumeError::NotAvailable(variant)) => {
            not_available_page(variant, &data.resume_assets_dir)
        }
        Err(DownloadResumeError::StoreError(msg)) => {
            error!("Resume download error: {}", msg);
            ApiResponse::internal_error(DOWNLOAD_FAILED)
        }
    }
}

fn not_available_page(variant: ResumeVariant, assets_dir: &str) -> HttpResponse {
    let page = ResumeNotAvailablePage {
        label: variant.label(),
        canonical_file_name: variant.canonical_file_name(),
        accent_color: variant.accent_color(),
        assets_dir,
    };

    match page.render() {
        Ok(html) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!("Failed to render resume page: {}", e);
            ApiResponse::internal_error(DOWNLOAD_FAILED)
        }
    }
}
