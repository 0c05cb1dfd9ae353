use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, ArticleUpdate,
        ImageUrl,
    },
};

/// Partial update: `None` fields stay untouched. A supplied tag list is
/// reconciled again and replaces the article's tags wholesale; the slug
/// changes only when explicitly supplied.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut update = ArticleUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(slug) = command.slug {
            update = update.with_slug(ArticleSlug::new(slug)?);
        }
        if let Some(description) = command.description {
            update = update.with_description(ArticleDescription::new(description)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(ArticleBody::new(body)?);
        }
        if let Some(image) = command.image {
            update = update.with_image(ImageUrl::new(image)?);
        }
        if let Some(labels) = command.tags {
            update = update.with_tag_ids(self.reconcile_labels(labels).await?);
        }

        let updated = self
            .write_repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(updated.into())
    }
}
