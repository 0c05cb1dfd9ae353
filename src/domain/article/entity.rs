// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, ImageUrl, PublishState,
};
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::{Author, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub image: Option<ImageUrl>,
    pub state: PublishState,
    pub author_id: UserId,
    pub favored_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Link path to the article page, derived from the slug.
    pub fn link(&self) -> String {
        format!("/article/{}", self.slug)
    }
}

/// An article materialised together with its author, ordered tags and
/// favorite set. Every repository read and mutation returns this shape.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub author: Author,
    pub tags: Vec<Tag>,
    pub favored_by: Vec<UserId>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub image: Option<ImageUrl>,
    pub state: PublishState,
    pub author_id: UserId,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update: `None` fields stay untouched; supplied tags replace the
/// article's tag list wholesale.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub image: Option<ImageUrl>,
    pub tag_ids: Option<Vec<TagId>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            body: None,
            image: None,
            tag_ids: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_image(mut self, image: ImageUrl) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_tag_ids(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }
}
