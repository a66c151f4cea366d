use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A photo inlined as `data:<mime>;base64,<payload>`.
///
/// Self-contained, so it can be stored straight into the content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDataUri(String);

impl PhotoDataUri {
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
