// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleId, ArticleListQuery, ArticleReadRepository,
    ArticleRecord, ArticleSlug, ArticleSort, ArticleTitle, ArticleUpdate, ArticleWriteRepository,
    ImageUrl, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagLabel};
use crate::domain::user::{Author, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    body: String,
    image: Option<String>,
    state: String,
    author_id: i64,
    favored_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
}

impl ArticleRow {
    fn into_record(self, tags: Vec<Tag>, favored_by: Vec<UserId>) -> DomainResult<ArticleRecord> {
        Ok(ArticleRecord {
            article: Article {
                id: ArticleId::new(self.id)?,
                title: ArticleTitle::new(self.title)?,
                slug: ArticleSlug::new(self.slug)?,
                description: ArticleDescription::new(self.description)?,
                body: ArticleBody::new(self.body)?,
                image: self.image.map(ImageUrl::new).transpose()?,
                state: self.state.parse()?,
                author_id: UserId::new(self.author_id)?,
                favored_count: self.favored_count,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author: Author {
                id: UserId::new(self.author_id)?,
                username: self.author_username,
            },
            tags,
            favored_by,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagLinkRow {
    article_id: i64,
    id: i64,
    label: String,
}

#[derive(Debug, FromRow)]
struct FavoriteRow {
    article_id: i64,
    user_id: i64,
}

/// Listing query head: the author-joined projection, before filters. Tag and
/// favorite sets are loaded separately in batches.
const RECORD_SELECT: &str = "SELECT a.id, a.title, a.slug, a.description, a.body, a.image, \
     a.state, a.author_id, a.favored_count, a.created_at, a.updated_at, \
     u.username AS author_username \
     FROM articles a JOIN users u ON u.id = a.author_id";

async fn load_tags(
    conn: &mut PgConnection,
    article_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<Tag>>> {
    let rows = sqlx::query_as::<_, TagLinkRow>(
        r#"
        SELECT at.article_id, t.id, t.label
        FROM article_tags at
        JOIN tags t ON t.id = at.tag_id
        WHERE at.article_id = ANY($1)
        ORDER BY at.article_id, at.position
        "#,
    )
    .bind(article_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    let mut by_article: HashMap<i64, Vec<Tag>> = HashMap::new();
    for row in rows {
        let tag = Tag {
            id: TagId::new(row.id)?,
            label: TagLabel::new(row.label)?,
        };
        by_article.entry(row.article_id).or_default().push(tag);
    }
    Ok(by_article)
}

async fn load_favorites(
    conn: &mut PgConnection,
    article_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<UserId>>> {
    let rows = sqlx::query_as::<_, FavoriteRow>(
        r#"
        SELECT article_id, user_id
        FROM article_favorites
        WHERE article_id = ANY($1)
        ORDER BY article_id, created_at, user_id
        "#,
    )
    .bind(article_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    let mut by_article: HashMap<i64, Vec<UserId>> = HashMap::new();
    for row in rows {
        by_article
            .entry(row.article_id)
            .or_default()
            .push(UserId::new(row.user_id)?);
    }
    Ok(by_article)
}

/// Attach tag and favorite sets to base rows, preserving row order.
async fn assemble_records(
    conn: &mut PgConnection,
    rows: Vec<ArticleRow>,
) -> DomainResult<Vec<ArticleRecord>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(conn, &ids).await?;
    let mut favorites = load_favorites(conn, &ids).await?;

    rows.into_iter()
        .map(|row| {
            let tags = tags.remove(&row.id).unwrap_or_default();
            let favored_by = favorites.remove(&row.id).unwrap_or_default();
            row.into_record(tags, favored_by)
        })
        .collect()
}

async fn fetch_record_by_id(
    conn: &mut PgConnection,
    id: i64,
) -> DomainResult<Option<ArticleRecord>> {
    let row = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT a.id, a.title, a.slug, a.description, a.body, a.image, a.state,
               a.author_id, a.favored_count, a.created_at, a.updated_at,
               u.username AS author_username
        FROM articles a
        JOIN users u ON u.id = a.author_id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    match row {
        Some(row) => {
            let records = assemble_records(conn, vec![row]).await?;
            Ok(records.into_iter().next())
        }
        None => Ok(None),
    }
}

/// Replace the article's tag links wholesale, keeping input order in
/// `position`. Duplicate ids collapse onto their first occurrence.
async fn replace_tag_links(
    conn: &mut PgConnection,
    article_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
    sqlx::query(
        r#"
        INSERT INTO article_tags (article_id, tag_id, position)
        SELECT $1, tag_id, ordinality
        FROM UNNEST($2::bigint[]) WITH ORDINALITY AS links(tag_id, ordinality)
        ON CONFLICT (article_id, tag_id) DO NOTHING
        "#,
    )
    .bind(article_id)
    .bind(&ids)
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleRecord> {
        let NewArticle {
            title,
            slug,
            description,
            body,
            image,
            state,
            author_id,
            tag_ids,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, description, body, image, state, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(image.as_ref().map(ImageUrl::as_str))
        .bind(state.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tag_links(&mut tx, id, &tag_ids).await?;

        let record = fetch_record_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::Storage("inserted article vanished".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(record)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<ArticleRecord>> {
        let ArticleUpdate {
            id,
            title,
            slug,
            description,
            body,
            image,
            tag_ids,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(description) = description {
            let description_str: String = description.into();
            builder.push(", description = ");
            builder.push_bind(description_str);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            builder.push(", body = ");
            builder.push_bind(body_str);
        }

        if let Some(image) = image {
            let image_str: String = image.into();
            builder.push(", image = ");
            builder.push_bind(image_str);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id");

        let updated = builder
            .build_query_scalar::<i64>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let Some(article_id) = updated else {
            return Ok(None);
        };

        if let Some(tag_ids) = tag_ids {
            replace_tag_links(&mut tx, article_id, &tag_ids).await?;
        }

        let record = fetch_record_by_id(&mut tx, article_id)
            .await?
            .ok_or_else(|| DomainError::Storage("updated article vanished".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(Some(record))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let Some(record) = fetch_record_by_id(&mut tx, i64::from(id)).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(Some(record))
    }

    async fn favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<Option<ArticleRecord>> {
        let article_id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Membership change and counter move in one statement, so the count
        // always equals the set size. Re-favoriting adds zero.
        let updated = sqlx::query(
            r#"
            WITH added AS (
                INSERT INTO article_favorites (article_id, user_id)
                SELECT $1, $2
                WHERE EXISTS (SELECT 1 FROM articles WHERE id = $1)
                ON CONFLICT (article_id, user_id) DO NOTHING
                RETURNING 1
            )
            UPDATE articles
            SET favored_count = favored_count + (SELECT COUNT(*) FROM added)
            WHERE id = $1
            "#,
        )
        .bind(article_id)
        .bind(i64::from(user_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let record = fetch_record_by_id(&mut tx, article_id)
            .await?
            .ok_or_else(|| DomainError::Storage("favorited article vanished".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(Some(record))
    }

    async fn unfavorite(
        &self,
        id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<Option<ArticleRecord>> {
        let article_id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let updated = sqlx::query(
            r#"
            WITH removed AS (
                DELETE FROM article_favorites
                WHERE article_id = $1 AND user_id = $2
                RETURNING 1
            )
            UPDATE articles
            SET favored_count = favored_count - (SELECT COUNT(*) FROM removed)
            WHERE id = $1
            "#,
        )
        .bind(article_id)
        .bind(i64::from(user_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let record = fetch_record_by_id(&mut tx, article_id)
            .await?
            .ok_or_else(|| DomainError::Storage("unfavorited article vanished".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(Some(record))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        fetch_record_by_id(&mut conn, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT a.id, a.title, a.slug, a.description, a.body, a.image, a.state,
                   a.author_id, a.favored_count, a.created_at, a.updated_at,
                   u.username AS author_username
            FROM articles a
            JOIN users u ON u.id = a.author_id
            WHERE a.slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let records = assemble_records(&mut conn, vec![row]).await?;
                Ok(records.into_iter().next())
            }
            None => Ok(None),
        }
    }

    async fn list(&self, query: ArticleListQuery) -> DomainResult<Vec<ArticleRecord>> {
        let ArticleListQuery {
            author,
            favorited_by,
            limit,
            offset,
            sort,
        } = query;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);

        let mut has_where = false;
        if let Some(author) = author {
            builder.push(" WHERE a.author_id = ");
            builder.push_bind(i64::from(author));
            has_where = true;
        }

        if let Some(user) = favorited_by {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
            }
            builder.push(
                "EXISTS (SELECT 1 FROM article_favorites f \
                 WHERE f.article_id = a.id AND f.user_id = ",
            );
            builder.push_bind(i64::from(user));
            builder.push(")");
        }

        match sort {
            ArticleSort::Popular => {
                builder.push(" ORDER BY a.favored_count DESC, a.created_at DESC, a.id DESC");
            }
            ArticleSort::Recent => {
                builder.push(" ORDER BY a.created_at DESC, a.id DESC");
            }
        }

        builder.push(" LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        assemble_records(&mut conn, rows).await
    }
}
