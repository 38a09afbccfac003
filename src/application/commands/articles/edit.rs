// src/application/commands/articles/edit.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        editor::ArticleEditSession,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

/// `article_id: None` opens a form for a new article.
#[derive(Debug, Clone, Default)]
pub struct OpenEditorCommand {
    pub article_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn open_editor(
        &self,
        actor: &AuthenticatedUser,
        command: OpenEditorCommand,
    ) -> ApplicationResult<ArticleEditSession> {
        let existing = match command.article_id {
            Some(raw) => {
                let id = ArticleId::new(raw)
                    .map_err(|_| ApplicationError::validation("article id must be positive"))?;
                let article = self
                    .deps
                    .article_read
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("article not found"))?;
                Some(article)
            }
            None => None,
        };

        tracing::debug!(
            actor = %actor.id,
            article_id = ?command.article_id,
            "opening article editor"
        );
        Ok(ArticleEditSession::open(
            self.deps.clone(),
            actor.id,
            existing.as_ref(),
        ))
    }
}
