// src/application/editor/mod.rs
//! Stateful article form: draft values, per-field validation, the nested
//! category form and the final commit to the stores.
mod category;
mod errors;
mod fields;
mod rules;
mod session;

use std::sync::Arc;

use crate::application::ports::{media::ImageStore, time::Clock, util::SlugGenerator};
use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
};

pub use category::CategoryDraft;
pub use errors::{FieldError, FieldErrors, Rule, SessionError};
pub use fields::{FieldPath, FieldValue, UnknownFieldPath};
pub use session::{ArticleDraft, ArticleEditSession, CategoryOutcome, SaveOutcome, SessionState};

/// Stores and helpers an editing session talks to. Cloning is cheap.
#[derive(Clone)]
pub struct EditorDependencies {
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub images: Arc<dyn ImageStore>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub clock: Arc<dyn Clock>,
}
