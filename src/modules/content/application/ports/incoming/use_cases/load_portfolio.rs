use async_trait::async_trait;

use crate::content::application::domain::entities::PortfolioContent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadPortfolioError {
    #[error("Content document not found")]
    NotFound,

    #[error("Content document is malformed: {0}")]
    Malformed(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

/// Typed view of the content document, for rendering.
#[async_trait]
pub trait LoadPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioContent, LoadPortfolioError>;
}
