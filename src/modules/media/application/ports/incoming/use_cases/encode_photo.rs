use async_trait::async_trait;

use crate::media::application::domain::{
    entities::PhotoDataUri, policies::upload_policy::UploadPolicy,
};

//
// ──────────────────────────────────────────────────────────
// Encode Photo Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodePhotoCommandError {
    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct EncodePhotoCommand {
    mime_type: String,
    bytes: Vec<u8>,
}

impl EncodePhotoCommand {
    /// A blank or missing MIME type falls back to the policy default.
    pub fn build(
        mime_type: Option<&str>,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, EncodePhotoCommandError> {
        let actual_bytes = bytes.len() as u64;
        if !policy.allows_size(actual_bytes) {
            return Err(EncodePhotoCommandError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
                actual_bytes,
            });
        }

        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(policy.default_mime_type)
            .to_string();

        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EncodePhotoUseCase: Send + Sync {
    async fn execute(&self, command: EncodePhotoCommand) -> PhotoDataUri;
}
