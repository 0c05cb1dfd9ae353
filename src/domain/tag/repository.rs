use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{Tag, TagLabel};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every stored tag whose label appears in `labels`, in one query.
    /// Duplicate labels in storage yield one result per stored record.
    async fn find_by_labels(&self, labels: &[TagLabel]) -> DomainResult<Vec<Tag>>;

    /// Batch-insert one record per given label, returned in input order.
    async fn insert_many(&self, labels: &[TagLabel]) -> DomainResult<Vec<Tag>>;

    async fn list(&self) -> DomainResult<Vec<Tag>>;

    /// Delete tags no article references; returns how many were removed.
    async fn prune_orphans(&self) -> DomainResult<u64>;
}
