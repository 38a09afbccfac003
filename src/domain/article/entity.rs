// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::category::CategoryId;
use crate::domain::media::ImageRef;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub category_id: Option<CategoryId>,
    pub image: Option<ImageRef>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub category_id: Option<CategoryId>,
    pub image: Option<ImageRef>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable columns of an existing article. The owner
/// and creation timestamp are fixed at insert time and cannot be changed here.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub category_id: Option<CategoryId>,
    pub image: Option<ImageRef>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            category_id: self.category_id,
            image: self.image,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Article {
    pub fn apply(&mut self, update: ArticleUpdate) {
        debug_assert_eq!(self.id, update.id);
        self.title = update.title;
        self.slug = update.slug;
        self.content = update.content;
        self.category_id = update.category_id;
        self.image = update.image;
        self.updated_at = update.updated_at;
    }
}
