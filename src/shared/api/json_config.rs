// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Rejects unreadable JSON bodies with the shared error envelope.
///
/// `limit` must leave room for content documents that embed a data-URI photo.
pub fn custom_json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            warn!("Rejected JSON body on {}: {}", req.path(), err);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("Invalid request body"),
            )
            .into()
        })
}
