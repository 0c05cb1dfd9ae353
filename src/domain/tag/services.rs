// src/domain/tag/services.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{TagId, TagLabel};
use crate::domain::tag::repository::TagRepository;

/// Domain service resolving free-text labels to canonical tag ids,
/// creating records for labels not seen before.
pub struct TagReconciler {
    repo: Arc<dyn TagRepository>,
}

impl TagReconciler {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// Resolve `labels` to tag ids: ids of already-stored tags first, then
    /// the ids of records created for labels with no match.
    ///
    /// The input is not deduplicated: repeated occurrences of an unknown
    /// label each create a record. An empty input returns an empty id list
    /// without touching storage.
    pub async fn reconcile(&self, labels: &[TagLabel]) -> DomainResult<Vec<TagId>> {
        if labels.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.repo.find_by_labels(labels).await?;
        let known: HashSet<&str> = existing.iter().map(|tag| tag.label.as_str()).collect();

        let missing: Vec<TagLabel> = labels
            .iter()
            .filter(|label| !known.contains(label.as_str()))
            .cloned()
            .collect();

        let created = if missing.is_empty() {
            Vec::new()
        } else {
            self.repo.insert_many(&missing).await?
        };

        tracing::debug!(
            matched = existing.len(),
            created = created.len(),
            "reconciled tag labels"
        );

        let mut ids: Vec<TagId> = existing.into_iter().map(|tag| tag.id).collect();
        ids.extend(created.into_iter().map(|tag| tag.id));
        Ok(ids)
    }
}
