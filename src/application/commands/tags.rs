// src/application/commands/tags.rs
use std::sync::Arc;

use crate::{application::error::ApplicationResult, domain::tag::TagRepository};

/// Cleanup collaborator for tags orphaned when a crash lands between tag
/// reconciliation and the article write. Meant to run periodically from
/// the embedding application.
pub struct TagMaintenanceService {
    repo: Arc<dyn TagRepository>,
}

impl TagMaintenanceService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// Delete tags referenced by no article; returns how many were removed.
    pub async fn prune_orphans(&self) -> ApplicationResult<u64> {
        let removed = self.repo.prune_orphans().await?;
        if removed > 0 {
            tracing::info!(removed, "pruned orphaned tags");
        }
        Ok(removed)
    }
}
