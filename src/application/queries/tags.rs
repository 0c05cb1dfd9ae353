// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::tag::TagRepository,
};

pub struct TagQueryService {
    repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// Every known tag, id ascending.
    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.repo.list().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
