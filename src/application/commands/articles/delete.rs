// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ARTICLES_INDEX, AuthenticatedUser, Confirmation},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the article and then its image. A failure to remove the image
    /// file is logged and does not undo the deletion.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<Confirmation> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::validation("article id must be positive"))?;
        let article = self
            .deps
            .article_read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.deps.article_write.delete(id).await?;

        if let Some(image) = &article.image {
            if let Err(err) = self.deps.images.delete(image).await {
                tracing::warn!(article_id = %id, image = image.as_str(), error = %err, "failed to delete article image");
            }
        }

        tracing::info!(article_id = %id, actor = %actor.id, "article deleted");
        Ok(Confirmation::danger("Article deleted.", ARTICLES_INDEX))
    }
}
