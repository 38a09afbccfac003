// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::articles::ArticleCommandService,
    editor::EditorDependencies,
    ports::media::ImageStore,
    queries::{articles::ArticleQueryService, categories::CategoryQueryService},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    images: Arc<dyn ImageStore>,
}

impl ApplicationServices {
    pub fn new(deps: EditorDependencies) -> Self {
        let images = Arc::clone(&deps.images);
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&deps.article_read),
            Arc::clone(&images),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&deps.categories)));
        let article_commands = Arc::new(ArticleCommandService::new(deps));

        Self {
            article_commands,
            article_queries,
            category_queries,
            images,
        }
    }

    pub fn images(&self) -> Arc<dyn ImageStore> {
        Arc::clone(&self.images)
    }
}
