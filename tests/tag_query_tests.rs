use std::sync::Arc;

use async_trait::async_trait;

mod support;

use byline_core::application::commands::tags::TagMaintenanceService;
use byline_core::application::queries::tags::TagQueryService;
use byline_core::domain::errors::DomainResult;
use byline_core::domain::tag::{Tag, TagLabel, TagRepository};

use support::InMemoryTagRepo;

#[tokio::test]
async fn list_tags_returns_catalog_in_id_order() {
    let repo = Arc::new(InMemoryTagRepo::with_labels(&["zig", "ada"]));
    let service = TagQueryService::new(repo);

    let tags = service.list_tags().await.expect("list_tags failed");

    assert_eq!(tags.len(), 2);
    // id order, not label order
    assert_eq!(tags[0].id, 1);
    assert_eq!(tags[0].label, "zig");
    assert_eq!(tags[1].id, 2);
    assert_eq!(tags[1].label, "ada");
}

#[tokio::test]
async fn list_tags_on_empty_catalog_is_empty() {
    let service = TagQueryService::new(Arc::new(InMemoryTagRepo::new()));
    let tags = service.list_tags().await.expect("list_tags failed");
    assert!(tags.is_empty());
}

/* -------------------------------- maintenance -------------------------------- */

struct FixedPruneRepo {
    removed: u64,
}

#[async_trait]
impl TagRepository for FixedPruneRepo {
    async fn find_by_labels(&self, _labels: &[TagLabel]) -> DomainResult<Vec<Tag>> {
        Ok(vec![])
    }

    async fn insert_many(&self, _labels: &[TagLabel]) -> DomainResult<Vec<Tag>> {
        Ok(vec![])
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        Ok(vec![])
    }

    async fn prune_orphans(&self) -> DomainResult<u64> {
        Ok(self.removed)
    }
}

#[tokio::test]
async fn prune_orphans_reports_repository_count() {
    let service = TagMaintenanceService::new(Arc::new(FixedPruneRepo { removed: 3 }));
    let removed = service.prune_orphans().await.expect("prune failed");
    assert_eq!(removed, 3);
}

#[tokio::test]
async fn prune_orphans_zero_when_nothing_is_orphaned() {
    let service = TagMaintenanceService::new(Arc::new(FixedPruneRepo { removed: 0 }));
    assert_eq!(service.prune_orphans().await.expect("prune failed"), 0);
}
