use async_trait::async_trait;

use crate::content::application::ports::{
    incoming::use_cases::{GetContentDocumentError, GetContentDocumentUseCase},
    outgoing::{ContentDocumentStore, ContentStoreError},
};

#[derive(Debug, Clone)]
pub struct GetContentDocumentService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    store: S,
}

impl<S> GetContentDocumentService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetContentDocumentUseCase for GetContentDocumentService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<u8>, GetContentDocumentError> {
        self.store.read().await.map_err(|e| match e {
            ContentStoreError::NotFound => GetContentDocumentError::NotFound,
            other => GetContentDocumentError::StoreError(other.to_string()),
        })
    }
}
