// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name, for selection widgets.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn exists_id(&self, id: CategoryId) -> DomainResult<bool>;
    async fn exists_name(&self, name: &str) -> DomainResult<bool>;
    async fn exists_slug(&self, slug: &str) -> DomainResult<bool>;
    /// Fails with `DomainError::Conflict` when the name or slug is taken.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
}
