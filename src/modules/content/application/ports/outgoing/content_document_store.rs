use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentStoreError {
    #[error("Content document not found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(String),
}

/// The single JSON document holding every portfolio section.
///
/// The store never interprets the bytes; last write wins.
#[async_trait]
pub trait ContentDocumentStore: Send + Sync {
    async fn read(&self) -> Result<Vec<u8>, ContentStoreError>;

    async fn overwrite(&self, document: &[u8]) -> Result<(), ContentStoreError>;
}
