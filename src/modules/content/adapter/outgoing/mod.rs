mod content_file_store;
mod portfolio_api_client;

pub use content_file_store::ContentFileStore;
pub use portfolio_api_client::PortfolioApiClient;
