// tests/support/mocks/tag_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use byline_core::domain::errors::DomainResult;
use byline_core::domain::tag::{Tag, TagId, TagLabel};

/* -------------------------------- InMemoryTagRepo -------------------------------- */

/// 呼び出し回数を記録するインメモリのタグリポジトリ
/// リコンサイラのストレージアクセス回数の検証に使う
#[derive(Default)]
pub struct InMemoryTagRepo {
    tags: Mutex<Vec<Tag>>,
    next_id: Mutex<i64>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl InMemoryTagRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// ラベルを id 1 から順に事前登録する
    pub fn with_labels(labels: &[&str]) -> Self {
        let repo = Self::default();
        {
            let mut tags = repo.tags.lock().unwrap();
            let mut next = repo.next_id.lock().unwrap();
            for label in labels {
                *next += 1;
                tags.push(Tag {
                    id: TagId::new(*next).unwrap(),
                    label: TagLabel::new(*label).unwrap(),
                });
            }
        }
        repo
    }

    /// 登録済みタグのスナップショット
    pub fn stored(&self) -> Vec<Tag> {
        self.tags.lock().unwrap().clone()
    }

    pub fn lookup(&self, id: TagId) -> Option<Tag> {
        self.tags
            .lock()
            .unwrap()
            .iter()
            .find(|tag| tag.id == id)
            .cloned()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl byline_core::domain::tag::TagRepository for InMemoryTagRepo {
    async fn find_by_labels(&self, labels: &[TagLabel]) -> DomainResult<Vec<Tag>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let tags = self.tags.lock().unwrap();
        Ok(tags
            .iter()
            .filter(|tag| {
                labels
                    .iter()
                    .any(|label| label.as_str() == tag.label.as_str())
            })
            .cloned()
            .collect())
    }

    async fn insert_many(&self, labels: &[TagLabel]) -> DomainResult<Vec<Tag>> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut tags = self.tags.lock().unwrap();
        let mut next = self.next_id.lock().unwrap();
        let mut created = Vec::with_capacity(labels.len());
        for label in labels {
            *next += 1;
            let tag = Tag {
                id: TagId::new(*next).unwrap(),
                label: label.clone(),
            };
            tags.push(tag.clone());
            created.push(tag);
        }
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.tags.lock().unwrap().clone();
        tags.sort_by_key(|tag| i64::from(tag.id));
        Ok(tags)
    }

    async fn prune_orphans(&self) -> DomainResult<u64> {
        // 記事リンクを持たないモックなので常に 0 を返す
        Ok(0)
    }
}
