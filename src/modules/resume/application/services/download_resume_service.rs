use async_trait::async_trait;
use tracing::{info, warn};

use crate::resume::application::{
    domain::entities::{ResumeDownload, ResumeVariant},
    ports::{
        incoming::use_cases::{DownloadResumeError, DownloadResumeUseCase},
        outgoing::ResumeFileStore,
    },
};

#[derive(Debug, Clone)]
pub struct DownloadResumeService<S>
where
    S: ResumeFileStore,
{
    store: S,
    download_prefix: Option<String>,
}

impl<S> DownloadResumeService<S>
where
    S: ResumeFileStore,
{
    pub fn new(store: S, download_prefix: Option<String>) -> Self {
        Self {
            store,
            download_prefix,
        }
    }
}

#[async_trait]
impl<S> DownloadResumeUseCase for DownloadResumeService<S>
where
    S: ResumeFileStore + Send + Sync,
{
    async fn execute(&self, variant: ResumeVariant) -> Result<ResumeDownload, DownloadResumeError> {
        let bytes = self
            .store
            .load(variant)
            .await
            .map_err(|e| DownloadResumeError::StoreError(e.to_string()))?;

        match bytes {
            Some(bytes) => {
                info!(%variant, bytes = bytes.len(), "Serving resume");
                Ok(ResumeDownload {
                    download_name: variant.download_name(self.download_prefix.as_deref()),
                    bytes,
                })
            }
            None => {
                warn!(%variant, "Resume requested but no file is present");
                Err(DownloadResumeError::NotAvailable(variant))
            }
        }
    }
}
