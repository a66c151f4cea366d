use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::content::application::ports::outgoing::{ContentDocumentStore, ContentStoreError};

/// Content document kept as a single file on local disk.
#[derive(Debug, Clone)]
pub struct ContentFileStore {
    path: PathBuf,
}

impl ContentFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ContentDocumentStore for ContentFileStore {
    async fn read(&self) -> Result<Vec<u8>, ContentStoreError> {
        tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentStoreError::NotFound,
            _ => ContentStoreError::Io(e.to_string()),
        })
    }

    async fn overwrite(&self, document: &[u8]) -> Result<(), ContentStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ContentStoreError::Io(e.to_string()))?;
        }

        tokio::fs::write(&self.path, document)
            .await
            .map_err(|e| ContentStoreError::Io(e.to_string()))?;

        debug!(path = %self.path.display(), bytes = document.len(), "Content document written");
        Ok(())
    }
}
