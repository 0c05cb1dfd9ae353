pub mod entity;
pub mod repository;
pub mod services;

pub use entity::{Tag, TagId, TagLabel};
pub use repository::TagRepository;
pub use services::TagReconciler;
