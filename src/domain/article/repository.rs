use crate::domain::article::entity::{ArticleRecord, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleSort};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Filter, pagination and ordering for article listings. The caller-facing
/// defaults (limit 20, offset 0) are applied by the query service before
/// this struct reaches a repository.
#[derive(Debug, Clone)]
pub struct ArticleListQuery {
    pub author: Option<UserId>,
    pub favorited_by: Option<UserId>,
    pub limit: i64,
    pub offset: i64,
    pub sort: ArticleSort,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleRecord>;

    /// Apply a partial update; `None` means the article does not exist.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<ArticleRecord>>;

    /// Remove an article, handing back the removed record for confirmation.
    async fn delete(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>>;

    /// Idempotently add `user_id` to the favorite set. The stored count
    /// moves only when membership actually changed, in the same storage
    /// operation as the set mutation.
    async fn favorite(&self, id: ArticleId, user_id: UserId)
    -> DomainResult<Option<ArticleRecord>>;

    /// Idempotently remove `user_id` from the favorite set; counterpart of
    /// [`favorite`](Self::favorite).
    async fn unfavorite(
        &self,
        id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<Option<ArticleRecord>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>>;
    async fn list(&self, query: ArticleListQuery) -> DomainResult<Vec<ArticleRecord>>;
}
