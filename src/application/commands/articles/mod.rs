// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod favorite;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use favorite::FavoriteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
