// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![cfg(test)]
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod tag_repo;
pub mod time;
pub mod util;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::fixed_now;

// タグリポジトリ
pub use tag_repo::InMemoryTagRepo;

// ユーティリティ関連
pub use util::{DummyClock, DummySlug};

// 記事リポジトリ
pub use article_repos::{DummyArticleRead, DummyArticleWrite};
