// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Remove an article, handing back the removed joined record so the
    /// caller can confirm what went away. A second call reports not-found.
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let removed = self
            .write_repo
            .delete(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(removed.into())
    }
}
