use crate::domain::article::{ArticleRecord, PublishState};
use crate::domain::user::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tags::TagDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            username: author.username,
        }
    }
}

/// The joined article shape handed to collaborators: tag and author data
/// materialised instead of bare foreign keys, plus the derived link path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub link: String,
    pub description: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub state: PublishState,
    pub author: AuthorDto,
    pub tags: Vec<TagDto>,
    pub favored_by: Vec<i64>,
    pub favored_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleRecord> for ArticleDto {
    fn from(record: ArticleRecord) -> Self {
        let link = record.article.link();
        let ArticleRecord {
            article,
            author,
            tags,
            favored_by,
        } = record;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            link,
            description: article.description.into(),
            body: article.body.into(),
            image: article.image.map(Into::into),
            state: article.state,
            author: author.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            favored_by: favored_by.into_iter().map(Into::into).collect(),
            favored_count: article.favored_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
