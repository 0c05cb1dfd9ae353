pub mod articles;
pub mod tags;

pub use articles::{ArticleDto, AuthorDto};
pub use tags::TagDto;
