use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Replace Content Document Command
// ──────────────────────────────────────────────────────────
//

/// A syntactically valid JSON body, re-serialized with 2-space indentation.
///
/// Only JSON syntax is checked; the portfolio schema is not. Key order is kept.
#[derive(Debug, Clone)]
pub struct ReplaceContentDocumentCommand {
    document: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplaceContentDocumentCommandError {
    #[error("Body is not valid JSON: {0}")]
    InvalidJson(String),
}

impl ReplaceContentDocumentCommand {
    pub fn new(document: Vec<u8>) -> Result<Self, ReplaceContentDocumentCommandError> {
        let value: serde_json::Value = serde_json::from_slice(&document)
            .map_err(|e| ReplaceContentDocumentCommandError::InvalidJson(e.to_string()))?;
        let document = serde_json::to_vec_pretty(&value)
            .map_err(|e| ReplaceContentDocumentCommandError::InvalidJson(e.to_string()))?;

        Ok(Self { document })
    }

    pub fn document(&self) -> &[u8] {
        &self.document
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplaceContentDocumentError {
    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReplaceContentDocumentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReplaceContentDocumentCommand,
    ) -> Result<(), ReplaceContentDocumentError>;
}
