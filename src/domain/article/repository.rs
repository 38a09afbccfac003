// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::listing::ArticleListQuery;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::Conflict` when the slug is already taken and
    /// `DomainError::NotFound` when the article no longer exists.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Whether another article already uses `slug`. Takes the raw value
    /// because it is called while the draft may still be malformed.
    async fn exists_slug_excluding(
        &self,
        slug: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool>;
    /// Returns one page of articles together with the total number of matches.
    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<(Vec<Article>, u64)>;
}
