use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SkillsResponse},
    content::application::ports::incoming::use_cases::LoadPortfolioError,
    shared::api::ApiResponse,
    site::application::skills_filter::{filter_skills, SkillCategory},
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SkillsQuery {
    /// Case-insensitive substring; blank returns every category
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsBody {
    pub categories: Vec<SkillCategory>,
}

/// Search skills across categories
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "site",
    params(SkillsQuery),
    responses(
        (status = 200, description = "Matching categories in display order",
            body = SkillsResponse, example = json!({ "success": true, "categories": [{ "name": "Languages", "skills": ["Go"] }] })),
        (status = 404, description = "No content document", body = ErrorResponse),
        (status = 500, description = "Content unreadable", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn search_skills_handler(
    data: web::Data<AppState>,
    query: web::Query<SkillsQuery>,
) -> impl Responder {
    match data.content.load_portfolio.execute().await {
        Ok(content) => {
            let q = query.q.as_deref().unwrap_or_default();
            ApiResponse::success(SkillsBody {
                categories: filter_skills(&content.skills, q),
            })
        }
        Err(LoadPortfolioError::NotFound) => ApiResponse::not_found("Content not found"),
        Err(err) => {
            error!("Failed to load content for skills search: {}", err);
            ApiResponse::internal_error("Failed to load content")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        content::application::{
            domain::entities::PortfolioContent, ports::incoming::use_cases::LoadPortfolioUseCase,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    struct MockLoadPortfolio(Result<PortfolioContent, LoadPortfolioError>);

    #[async_trait]
    impl LoadPortfolioUseCase for MockLoadPortfolio {
        async fn execute(&self) -> Result<PortfolioContent, LoadPortfolioError> {
            self.0.clone()
        }
    }

    async fn search(
        result: Result<PortfolioContent, LoadPortfolioError>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_load_portfolio(MockLoadPortfolio(result))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(search_skills_handler)).await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    fn content() -> PortfolioContent {
        let mut content = PortfolioContent::default();
        content.skills.languages = vec!["Go".to_string(), "Python".to_string()];
        content.skills.tools = vec!["Git".to_string()];
        content
    }

    #[actix_web::test]
    async fn go_returns_languages_only() {
        let resp = search(Ok(content()), "/api/skills?q=go").await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "categories": [{ "name": "Languages", "skills": ["Go"] }]
            })
        );
    }

    #[actix_web::test]
    async fn missing_query_returns_all_categories() {
        let resp = search(Ok(content()), "/api/skills").await;

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["categories"].as_array().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn missing_document_is_not_found() {
        let resp = search(Err(LoadPortfolioError::NotFound), "/api/skills?q=go").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
