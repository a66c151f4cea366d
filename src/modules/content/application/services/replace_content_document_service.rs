use async_trait::async_trait;
use tracing::info;

use crate::content::application::ports::{
    incoming::use_cases::{
        ReplaceContentDocumentCommand, ReplaceContentDocumentError, ReplaceContentDocumentUseCase,
    },
    outgoing::ContentDocumentStore,
};

#[derive(Debug, Clone)]
pub struct ReplaceContentDocumentService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    store: S,
}

impl<S> ReplaceContentDocumentService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ReplaceContentDocumentUseCase for ReplaceContentDocumentService<S>
where
    S: ContentDocumentStore + Send + Sync,
{
    async fn execute(
        &self,
        command: ReplaceContentDocumentCommand,
    ) -> Result<(), ReplaceContentDocumentError> {
        self.store
            .overwrite(command.document())
            .await
            .map_err(|e| ReplaceContentDocumentError::StoreError(e.to_string()))?;

        info!(bytes = command.document().len(), "Content document overwritten");
        Ok(())
    }
}
