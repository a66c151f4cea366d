mod page;
pub mod sections;

pub use page::{render_load_failed, render_portfolio, LOAD_FAILED_MESSAGE};
