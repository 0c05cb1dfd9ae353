// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        article::ArticleWriteRepository,
        tag::{TagId, TagLabel, TagReconciler},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) reconciler: Arc<TagReconciler>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        reconciler: Arc<TagReconciler>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            write_repo,
            reconciler,
            clock,
            slugger,
        }
    }

    /// One reconciliation pass over raw labels, as submitted.
    pub(super) async fn reconcile_labels(
        &self,
        labels: Vec<String>,
    ) -> ApplicationResult<Vec<TagId>> {
        let labels = labels
            .into_iter()
            .map(TagLabel::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.reconciler.reconcile(&labels).await?)
    }
}
