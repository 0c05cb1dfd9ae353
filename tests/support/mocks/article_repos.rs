// tests/support/mocks/article_repos.rs
use async_trait::async_trait;

/* -------------------------------- ArticleWriteRepository -------------------------------- */

/// ダミーの記事書き込みリポジトリ
pub struct DummyArticleWrite;

#[async_trait]
impl byline_core::domain::article::ArticleWriteRepository for DummyArticleWrite {
    async fn insert(
        &self,
        _article: byline_core::domain::article::NewArticle,
    ) -> byline_core::domain::errors::DomainResult<byline_core::domain::article::ArticleRecord>
    {
        Err(byline_core::domain::errors::DomainError::NotFound(
            "not implemented".into(),
        ))
    }

    async fn update(
        &self,
        _update: byline_core::domain::article::ArticleUpdate,
    ) -> byline_core::domain::errors::DomainResult<
        Option<byline_core::domain::article::ArticleRecord>,
    > {
        Ok(None)
    }

    async fn delete(
        &self,
        _id: byline_core::domain::article::ArticleId,
    ) -> byline_core::domain::errors::DomainResult<
        Option<byline_core::domain::article::ArticleRecord>,
    > {
        Ok(None)
    }

    async fn favorite(
        &self,
        _id: byline_core::domain::article::ArticleId,
        _user_id: byline_core::domain::user::UserId,
    ) -> byline_core::domain::errors::DomainResult<
        Option<byline_core::domain::article::ArticleRecord>,
    > {
        Ok(None)
    }

    async fn unfavorite(
        &self,
        _id: byline_core::domain::article::ArticleId,
        _user_id: byline_core::domain::user::UserId,
    ) -> byline_core::domain::errors::DomainResult<
        Option<byline_core::domain::article::ArticleRecord>,
    > {
        Ok(None)
    }
}

/* -------------------------------- ArticleReadRepository -------------------------------- */

/// ダミーの記事読み取りリポジトリ
pub struct DummyArticleRead;

#[async_trait]
impl byline_core::domain::article::ArticleReadRepository for DummyArticleRead {
    async fn find_by_id(
        &self,
        _id: byline_core::domain::article::ArticleId,
    ) -> byline_core::domain::errors::DomainResult<
        Option<byline_core::domain::article::ArticleRecord>,
    > {
        Ok(None)
    }

    async fn find_by_slug(
        &self,
        _slug: &byline_core::domain::article::ArticleSlug,
    ) -> byline_core::domain::errors::DomainResult<
        Option<byline_core::domain::article::ArticleRecord>,
    > {
        Ok(None)
    }

    async fn list(
        &self,
        _query: byline_core::domain::article::ArticleListQuery,
    ) -> byline_core::domain::errors::DomainResult<Vec<byline_core::domain::article::ArticleRecord>>
    {
        Ok(vec![])
    }
}
