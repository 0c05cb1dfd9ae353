use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleListQuery, ArticleSort},
        user::UserId,
    },
};

/// Listing parameters as submitted by the caller. Absent limit and offset
/// fall back to 20 and 0; no upper bound is enforced here.
pub struct ListArticlesQuery {
    pub author: Option<i64>,
    pub favorited: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<String>,
}

impl ArticleQueryService {
    /// List joined article records. The favorited filter needs a caller
    /// identity and is silently dropped for anonymous callers; an empty
    /// result set is not an error.
    pub async fn list_articles(
        &self,
        caller: Option<UserId>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        const DEFAULT_LIMIT: u32 = 20;

        let author = query.author.map(UserId::new).transpose()?;
        let favorited_by = if query.favorited { caller } else { None };

        let list_query = ArticleListQuery {
            author,
            favorited_by,
            limit: i64::from(query.limit.unwrap_or(DEFAULT_LIMIT)),
            offset: i64::from(query.offset.unwrap_or(0)),
            sort: ArticleSort::from_param(query.sort.as_deref()),
        };

        let records = self.read_repo.list(list_query).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
