use async_trait::async_trait;

use crate::content::application::domain::entities::ContentDocument;

/// A local file picked for the profile photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Client-side view of the portfolio server.
#[async_trait]
pub trait PortfolioGateway: Send + Sync {
    async fn fetch_content(&self) -> Result<ContentDocument, GatewayError>;

    /// Overwrites the whole document on the server.
    async fn persist_content(&self, document: &ContentDocument) -> Result<(), GatewayError>;

    /// Returns the photo as a self-contained data URI.
    async fn upload_photo(&self, photo: PhotoFile) -> Result<String, GatewayError>;
}
