use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContentDocumentError {
    #[error("Content document not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

/// Raw bytes of the content document, exactly as last written.
#[async_trait]
pub trait GetContentDocumentUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<u8>, GetContentDocumentError>;
}
