// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{
            ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, ImageUrl, NewArticle,
            PublishState,
        },
        user::UserId,
    },
};

/// Fields for a new article. Shape checks happened upstream; the slug is
/// derived from the title when absent.
pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub body: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub state: Option<PublishState>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    body: Option<String>,
    image: Option<String>,
    tags: Vec<String>,
    state: Option<PublishState>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn state(mut self, state: PublishState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            description: self.description.ok_or("description is required")?,
            body: self.body.ok_or("body is required")?,
            image: self.image,
            tags: self.tags,
            state: self.state,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        author: UserId,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let slug = match command.slug {
            Some(slug) => ArticleSlug::new(slug)?,
            None => ArticleSlug::new(self.slugger.slugify(title.as_str()))?,
        };
        let description = ArticleDescription::new(command.description)?;
        let body = ArticleBody::new(command.body)?;
        let image = command.image.map(ImageUrl::new).transpose()?;

        let tag_ids = self.reconcile_labels(command.tags).await?;

        let now = self.clock.now();
        let new_article = NewArticle {
            title,
            slug,
            description,
            body,
            image,
            state: command.state.unwrap_or_default(),
            author_id: author,
            tag_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
