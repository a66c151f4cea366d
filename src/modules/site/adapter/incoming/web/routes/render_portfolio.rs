use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use chrono::Datelike;
use serde::Deserialize;
use tracing::error;

use crate::{
    site::adapter::incoming::web::views::{render_load_failed, render_portfolio},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioQuery {
    #[serde(default)]
    pub skills: Option<String>,
}

#[get("/")]
pub async fn render_portfolio_handler(
    data: web::Data<AppState>,
    query: web::Query<PortfolioQuery>,
) -> impl Responder {
    let content = match data.content.load_portfolio.execute().await {
        Ok(content) => content,
        Err(err) => {
            error!("Failed to load content: {}", err);
            return load_failed();
        }
    };

    let skills_query = query.skills.as_deref().unwrap_or_default();
    let year = chrono::Utc::now().year();

    match render_portfolio(&content, skills_query, year) {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!("Failed to render portfolio: {}", e);
            load_failed()
        }
    }
}

fn load_failed() -> HttpResponse {
    let html = render_load_failed().unwrap_or_else(|e| {
        error!("Failed to render failure page: {}", e);
        String::from("Failed to load portfolio content.")
    });

    HttpResponse::InternalServerError()
        .content_type(ContentType::html())
        .body(html)
}
