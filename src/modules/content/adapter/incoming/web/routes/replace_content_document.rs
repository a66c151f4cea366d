use actix_web::{put, web, Responder};
use tracing::{error, warn};

use crate::{
    api::schemas::{AckResponse, ErrorResponse},
    content::application::ports::incoming::use_cases::{
        ReplaceContentDocumentCommand, ReplaceContentDocumentError,
    },
    shared::api::ApiResponse,
    AppState,
};

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const UPDATE_FAILED: &str = "Failed to update content";

/// Replace the whole content document
///
/// The body is stored pretty-printed. Nothing is merged; last write wins.
#[utoipa::path(
    put,
    path = "/api/content",
    tag = "content",
    request_body(content = Object, content_type = "application/json",
        description = "The complete portfolio document"),
    responses(
        (status = 200, description = "Document replaced", body = AckResponse,
            example = json!({ "success": true })),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 500, description = "Write failure", body = ErrorResponse,
            example = json!({ "success": false, "error": "Failed to update content" })),
    )
)]
#[put("/api/content")]
pub async fn replace_content_document_handler(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let command = match ReplaceContentDocumentCommand::new(body.to_vec()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!("Content update rejected: {}", err);
            return ApiResponse::bad_request(INVALID_REQUEST_BODY);
        }
    };

    match data.content.replace_document.execute(command).await {
        Ok(()) => ApiResponse::ok(),
        Err(ReplaceContentDocumentError::StoreError(msg)) => {
            error!("Failed to write content document: {}", msg);
            ApiResponse::internal_error(UPDATE_FAILED)
        }
    }
}
