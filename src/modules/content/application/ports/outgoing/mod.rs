mod content_document_store;
mod portfolio_gateway;

pub use content_document_store::{ContentDocumentStore, ContentStoreError};
pub use portfolio_gateway::{GatewayError, PhotoFile, PortfolioGateway};
