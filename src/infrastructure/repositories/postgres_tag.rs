// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagLabel, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    label: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            label: TagLabel::new(row.label)?,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_labels(&self, labels: &[TagLabel]) -> DomainResult<Vec<Tag>> {
        if labels.is_empty() {
            return Ok(Vec::new());
        }

        let labels: Vec<&str> = labels.iter().map(TagLabel::as_str).collect();
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, label FROM tags WHERE label = ANY($1) ORDER BY id",
        )
        .bind(&labels)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn insert_many(&self, labels: &[TagLabel]) -> DomainResult<Vec<Tag>> {
        if labels.is_empty() {
            return Ok(Vec::new());
        }

        let labels: Vec<&str> = labels.iter().map(TagLabel::as_str).collect();
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (label)
            SELECT label FROM UNNEST($1::text[]) AS incoming(label)
            RETURNING id, label
            "#,
        )
        .bind(&labels)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, label FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn prune_orphans(&self) -> DomainResult<u64> {
        let result = sqlx::query(
            "DELETE FROM tags WHERE NOT EXISTS \
             (SELECT 1 FROM article_tags WHERE article_tags.tag_id = tags.id)",
        )
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
