// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::media::ImageStore, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) images: Arc<dyn ImageStore>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { read_repo, images }
    }
}
