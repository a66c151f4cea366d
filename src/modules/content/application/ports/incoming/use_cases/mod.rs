mod get_content_document;
mod load_portfolio;
mod replace_content_document;

pub use get_content_document::{GetContentDocumentError, GetContentDocumentUseCase};
pub use load_portfolio::{LoadPortfolioError, LoadPortfolioUseCase};
pub use replace_content_document::{
    ReplaceContentDocumentCommand, ReplaceContentDocumentCommandError,
    ReplaceContentDocumentError, ReplaceContentDocumentUseCase,
};
