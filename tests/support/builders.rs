// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use byline_core::domain::article::*;
use byline_core::domain::tag::{Tag, TagId, TagLabel};
use byline_core::domain::user::{Author, UserId};

pub struct ArticleRecordBuilder {
    id: i64,
    title: String,
    slug: String,
    description: String,
    body: String,
    image: Option<String>,
    author_id: i64,
    username: String,
    state: PublishState,
    favored_by: Vec<i64>,
    tags: Vec<(i64, String)>,
    created_at: DateTime<Utc>,
}

impl ArticleRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            description: "Test description".into(),
            body: "Test body".into(),
            image: None,
            author_id: 1,
            username: "author".into(),
            state: PublishState::Draft,
            favored_by: vec![],
            tags: vec![],
            created_at: super::mocks::time::fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn author(mut self, id: i64, username: impl Into<String>) -> Self {
        self.author_id = id;
        self.username = username.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.state = PublishState::Published;
        self
    }

    /// The favorite set; the stored count always mirrors its size.
    pub fn favored_by(mut self, users: Vec<i64>) -> Self {
        self.favored_by = users;
        self
    }

    pub fn tag(mut self, id: i64, label: impl Into<String>) -> Self {
        self.tags.push((id, label.into()));
        self
    }

    /// Shift the creation timestamp off the fixed test time, for ordering.
    pub fn created_seconds_after(mut self, seconds: i64) -> Self {
        self.created_at = super::mocks::time::fixed_now() + Duration::seconds(seconds);
        self
    }

    pub fn build(self) -> ArticleRecord {
        ArticleRecord {
            article: Article {
                id: ArticleId::new(self.id).unwrap(),
                title: ArticleTitle::new(self.title).unwrap(),
                slug: ArticleSlug::new(self.slug).unwrap(),
                description: ArticleDescription::new(self.description).unwrap(),
                body: ArticleBody::new(self.body).unwrap(),
                image: self.image.map(|url| ImageUrl::new(url).unwrap()),
                state: self.state,
                author_id: UserId::new(self.author_id).unwrap(),
                favored_count: self.favored_by.len() as i64,
                created_at: self.created_at,
                updated_at: self.created_at,
            },
            author: Author {
                id: UserId::new(self.author_id).unwrap(),
                username: self.username,
            },
            tags: self
                .tags
                .into_iter()
                .map(|(id, label)| Tag {
                    id: TagId::new(id).unwrap(),
                    label: TagLabel::new(label).unwrap(),
                })
                .collect(),
            favored_by: self
                .favored_by
                .into_iter()
                .map(|id| UserId::new(id).unwrap())
                .collect(),
        }
    }
}
