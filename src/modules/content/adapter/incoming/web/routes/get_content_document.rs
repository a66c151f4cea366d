use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    content::application::ports::incoming::use_cases::GetContentDocumentError,
    shared::api::ApiResponse,
    AppState,
};

/// Serve the raw content document
#[utoipa::path(
    get,
    path = "/content.json",
    tag = "content",
    responses(
        (status = 200, description = "Content document as last written",
            body = Object),
        (status = 404, description = "No document yet", body = ErrorResponse),
        (status = 500, description = "Read failure", body = ErrorResponse),
    )
)]
#[get("/content.json")]
pub async fn get_content_document_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_document.execute().await {
        Ok(document) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(document),
        Err(GetContentDocumentError::NotFound) => ApiResponse::not_found("Content not found"),
        Err(GetContentDocumentError::StoreError(msg)) => {
            error!("Failed to read content document: {}", msg);
            ApiResponse::internal_error("Failed to load content")
        }
    }
}
