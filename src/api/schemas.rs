// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::site::application::skills_filter::SkillCategory;

/// Bare acknowledgement
#[derive(Serialize, ToSchema)]
pub struct AckResponse {
    #[schema(example = true)]
    pub success: bool,
}

/// Acknowledgement with a human-readable message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Message received successfully")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable error message
    #[schema(example = "Invalid form data")]
    pub error: String,
}

/// Uploaded photo encoded as a data URI
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUploadResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub photo_url: String,
}

/// Skill categories that matched a search
#[derive(Serialize, ToSchema)]
pub struct SkillsResponse {
    #[schema(example = true)]
    pub success: bool,
    pub categories: Vec<SkillCategory>,
}
