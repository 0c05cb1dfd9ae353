// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, user::UserId},
};

pub struct FavoriteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Add the caller to the article's favorite set. Safe to repeat:
    /// membership and the stored count change at most once per user.
    pub async fn favorite_article(
        &self,
        user_id: UserId,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let record = self
            .write_repo
            .favorite(id, user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(record.into())
    }

    /// Remove the caller from the favorite set; a no-op when the caller
    /// never favorited the article.
    pub async fn unfavorite_article(
        &self,
        user_id: UserId,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let record = self
            .write_repo
            .unfavorite(id, user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(record.into())
    }
}
