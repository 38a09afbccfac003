// src/application/queries/articles/mod.rs
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
