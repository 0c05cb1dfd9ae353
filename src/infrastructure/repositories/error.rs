use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_STATE_CHECK: &str = "articles_state_chk";
const CNT_ARTICLE_TAG: &str = "article_tags_tag_id_fkey";
const CNT_FAVORITE_USER: &str = "article_favorites_user_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_ARTICLE_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_FAVORITE_USER => DomainError::NotFound("user not found".into()),
                    CNT_ARTICLE_STATE_CHECK => {
                        DomainError::Validation("unknown publish state".into())
                    }
                    other => {
                        DomainError::Storage(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Storage(db_err.message().to_string())
        }
        _ => DomainError::Storage(err.to_string()),
    }
}
