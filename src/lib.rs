//! Articles domain core: tag reconciliation, joined CRUD and listing, and
//! favorite sets over SQLx/PostgreSQL.
//!
//! HTTP, authentication and request validation belong to the embedding
//! application. This crate exposes command and query services over
//! repository traits; PostgreSQL implementations live under
//! [`infrastructure`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::ApplicationServices;
pub use config::AppConfig;
