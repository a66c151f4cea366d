pub mod get_content_document;
pub mod replace_content_document;

pub use get_content_document::get_content_document_handler;
pub use replace_content_document::replace_content_document_handler;
