// src/application/dto/articles.rs
use super::pagination::OffsetPage;
use crate::application::ports::media::ImageStore;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub image: Option<String>,
    /// Public URL of the image, or a placeholder when the article has none.
    pub image_url: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_article(article: Article, images: &dyn ImageStore) -> Self {
        let image_url = images.url_for(article.image.as_ref());
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            category_id: article.category_id.map(Into::into),
            image: article.image.map(|image| image.into_inner()),
            image_url,
            owner_id: article.owner_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    pub articles: OffsetPage<ArticleDto>,
    /// Effective sort column, echoed so clients can toggle it next time.
    pub sort: String,
    pub direction: String,
    /// Whether a later page exists.
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
