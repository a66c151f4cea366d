mod get_content_document_service;
mod load_portfolio_service;
mod replace_content_document_service;

pub use get_content_document_service::GetContentDocumentService;
pub use load_portfolio_service::LoadPortfolioService;
pub use replace_content_document_service::ReplaceContentDocumentService;
