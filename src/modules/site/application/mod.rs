pub mod presentation;
pub mod skills_filter;
