// src/application/commands/articles/mod.rs
mod delete;
mod edit;
mod service;

pub use delete::DeleteArticleCommand;
pub use edit::OpenEditorCommand;
pub use service::ArticleCommandService;
