use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{
    AckResponse, ErrorResponse, MessageResponse, PhotoUploadResponse, SkillsResponse,
};
use crate::contact::adapter::incoming::web::routes::submit_contact::SubmitContactRequest;
use crate::site::application::skills_filter::SkillCategory;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content, contact, photo upload and resume endpoints behind the portfolio page"
    ),
    paths(
        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_content_document::get_content_document_handler,
        crate::content::adapter::incoming::web::routes::replace_content_document::replace_content_document_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,

        // Media endpoints
        crate::media::adapter::incoming::web::routes::upload_photo::upload_photo_handler,

        // Resume endpoints
        crate::resume::adapter::incoming::web::routes::download_resume::download_resume_handler,

        // Site endpoints
        crate::site::adapter::incoming::web::routes::search_skills::search_skills_handler,
    ),
    components(
        schemas(
            // Response wrappers
            AckResponse,
            MessageResponse,
            ErrorResponse,
            PhotoUploadResponse,
            SkillsResponse,

            // DTOs
            SubmitContactRequest,
            SkillCategory,
        )
    ),
    tags(
        (name = "content", description = "Portfolio content document"),
        (name = "contact", description = "Contact form submissions"),
        (name = "media", description = "Profile photo upload"),
        (name = "resume", description = "Resume downloads"),
        (name = "site", description = "Page helpers"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
