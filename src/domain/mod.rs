pub mod article;
pub mod errors;
pub mod tag;
pub mod user;
