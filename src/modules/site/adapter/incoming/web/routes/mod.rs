pub mod render_portfolio;
pub mod search_skills;

pub use render_portfolio::render_portfolio_handler;
pub use search_skills::search_skills_handler;
