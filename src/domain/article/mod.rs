// src/domain/article/mod.rs
pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use listing::{ArticleListQuery, ArticleSort, ArticleSortField, SortDirection};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle};
