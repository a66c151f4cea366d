use async_trait::async_trait;
use tracing::debug;

use crate::media::application::{
    domain::entities::PhotoDataUri,
    ports::incoming::use_cases::{EncodePhotoCommand, EncodePhotoUseCase},
};

/// Inlines the upload; nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct EncodePhotoService;

impl EncodePhotoService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EncodePhotoUseCase for EncodePhotoService {
    async fn execute(&self, command: EncodePhotoCommand) -> PhotoDataUri {
        debug!(
            mime_type = command.mime_type(),
            bytes = command.bytes().len(),
            "Encoding uploaded photo"
        );
        PhotoDataUri::encode(command.mime_type(), command.bytes())
    }
}
