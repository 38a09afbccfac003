// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand,
    dto::{ArticleDto, ArticleListDto, Confirmation},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::domain::article::{ArticleSortField, SortDirection};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Case-insensitive title search.
    #[serde(default)]
    pub q: Option<String>,
    /// Currently applied sort column.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub sort: Option<ArticleSortField>,
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub direction: Option<SortDirection>,
    /// Column header that was clicked; toggles the direction when it is
    /// already the sort column.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub sort_by: Option<ArticleSortField>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles.", body = ArticleListDto)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let query = ListArticlesQuery {
        search: params.q,
        sort: params.sort,
        direction: params.direction,
        sort_by: params.sort_by,
        page: params.page,
        per_page: params.per_page,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{article}",
    params(("article" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this slug.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{article}",
    params(("article" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article and its image removed.", body = Confirmation),
        (status = 401, description = "Missing x-user-id header.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Confirmation>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}
