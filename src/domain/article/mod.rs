pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleRecord, ArticleUpdate, NewArticle};
pub use repository::{ArticleListQuery, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleSort, ArticleTitle, ImageUrl,
    PublishState,
};
