use crate::shared::config::DEFAULT_PHOTO_UPLOAD_MAX_BYTES;

/// Limits applied to an uploaded profile photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub default_mime_type: &'static str,
}

impl UploadPolicy {
    pub const DEFAULT_MIME_TYPE: &'static str = "application/octet-stream";

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            default_mime_type: Self::DEFAULT_MIME_TYPE,
        }
    }

    pub fn allows_size(&self, size_bytes: u64) -> bool {
        size_bytes <= self.max_file_size_bytes
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_UPLOAD_MAX_BYTES)
    }
}
