// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, tags::TagMaintenanceService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, tags::TagQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        tag::{TagReconciler, TagRepository},
    },
};

/// Wiring aggregate: builds every command/query service from repository
/// trait objects and ports, so the embedding application assembles one
/// value and hands out clones of the `Arc`s.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    pub tag_maintenance: Arc<TagMaintenanceService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let reconciler = Arc::new(TagReconciler::new(Arc::clone(&tag_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&reconciler),
            Arc::clone(&clock),
            Arc::clone(&slugger),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));
        let tag_maintenance = Arc::new(TagMaintenanceService::new(Arc::clone(&tag_repo)));

        Self {
            article_commands,
            article_queries,
            tag_queries,
            tag_maintenance,
        }
    }
}
