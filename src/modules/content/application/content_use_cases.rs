use std::sync::Arc;

use crate::content::application::ports::incoming::use_cases::{
    GetContentDocumentUseCase, LoadPortfolioUseCase, ReplaceContentDocumentUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_document: Arc<dyn GetContentDocumentUseCase + Send + Sync>,
    pub replace_document: Arc<dyn ReplaceContentDocumentUseCase + Send + Sync>,
    pub load_portfolio: Arc<dyn LoadPortfolioUseCase + Send + Sync>,
}
