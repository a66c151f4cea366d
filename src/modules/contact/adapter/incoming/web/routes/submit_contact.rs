use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, MessageResponse},
    contact::application::ports::incoming::use_cases::{
        SubmitContactCommand, SubmitContactCommandError, SubmitContactError,
    },
    shared::api::ApiResponse,
    AppState,
};

pub const INVALID_FORM_DATA: &str = "Invalid form data";
pub const MESSAGE_RECEIVED: &str = "Message received successfully";

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "I'd like to talk about a role on our team.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 200, description = "Message stored", body = MessageResponse,
            example = json!({ "success": true, "message": "Message received successfully" })),
        (status = 400, description = "Missing or empty field", body = ErrorResponse,
            example = json!({ "success": false, "error": "Invalid form data" })),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: Result<web::Json<SubmitContactRequest>, actix_web::Error>,
) -> impl Responder {
    let payload = match payload {
        Ok(json) => json.into_inner(),
        Err(err) => {
            warn!("Contact form rejected: {}", err);
            return ApiResponse::bad_request(INVALID_FORM_DATA);
        }
    };

    // 1️⃣ Build command (validation happens here)
    let command = match SubmitContactCommand::new(payload.name, payload.email, payload.message)
    {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.contact.submit.execute(command).await {
        Ok(_) => ApiResponse::message(MESSAGE_RECEIVED),
        Err(err) => map_submit_contact_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

// Field-level detail stays in the logs.
fn map_command_error(err: SubmitContactCommandError) -> actix_web::HttpResponse {
    warn!("Contact form rejected: {}", err);
    ApiResponse::bad_request(INVALID_FORM_DATA)
}

fn map_submit_contact_error(err: SubmitContactError) -> actix_web::HttpResponse {
    match err {
        SubmitContactError::StoreError(msg) => {
            error!("Failed to store contact submission: {}", msg);
            ApiResponse::internal_error("Failed to submit contact form")
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
