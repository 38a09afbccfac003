// src/presentation/http/openapi.rs
use super::extractors::USER_ID_HEADER;
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::editor::open_session,
        crate::presentation::http::controllers::editor::get_session,
        crate::presentation::http::controllers::editor::discard_session,
        crate::presentation::http::controllers::editor::set_field,
        crate::presentation::http::controllers::editor::upload_image,
        crate::presentation::http::controllers::editor::validate_field,
        crate::presentation::http::controllers::editor::open_category,
        crate::presentation::http::controllers::editor::close_category,
        crate::presentation::http::controllers::editor::save_category,
        crate::presentation::http::controllers::editor::save,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::editor::OpenSessionRequest,
            crate::presentation::http::controllers::editor::SetFieldRequest,
            crate::presentation::http::controllers::editor::CategoryCreatedResponse,
            crate::presentation::http::controllers::editor::ArticleSavedResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::Confirmation,
            crate::application::dto::BannerStyle,
            crate::application::dto::EditorSessionDto,
            crate::application::dto::ValidationErrorsDto,
            crate::application::dto::FieldErrorDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and removal"),
        (name = "Categories", description = "Category lookup"),
        (name = "Editor", description = "Interactive article editing sessions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("userId" = [])),
    info(
        title = "Article Desk API",
        description = "Blog article editing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "userId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(USER_ID_HEADER))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
