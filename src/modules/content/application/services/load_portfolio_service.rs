use async_trait::async_trait;

use crate::content::application::{
    domain::entities::PortfolioContent,
    ports::{
        incoming::use_cases::{LoadPortfolioError, LoadPortfolioUseCase},
        outgoing::{ContentDocumentStore, ContentStoreError},
    },
};

#[derive(Debug, Clone)]
pub struct LoadPortfolioService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    store: S,
}

impl<S> LoadPortfolioService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> LoadPortfolioUseCase for LoadPortfolioService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioContent, LoadPortfolioError> {
        let raw = self.store.read().await.map_err(|e| match e {
            ContentStoreError::NotFound => LoadPortfolioError::NotFound,
            other => LoadPortfolioError::StoreError(other.to_string()),
        })?;

        serde_json::from_slice(&raw).map_err(|e| LoadPortfolioError::Malformed(e.to_string()))
    }
}
