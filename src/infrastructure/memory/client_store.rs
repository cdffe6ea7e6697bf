//! In-Memory Client Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::application::ports::{
    ClientStorePort, DeleteOutcome, InsertOutcome, RepositoryError,
};
use crate::domain::client::{Client, ClientId, NewClient};

/// 带插入序号的文档
struct StoredClient {
    sequence: u64,
    client: Client,
}

/// 内存客户存储
///
/// 进程退出即丢失，用于本地开发与测试（`database.uri = "memory:"`）
pub struct InMemoryClientStore {
    documents: DashMap<ClientId, StoredClient>,
    next_sequence: AtomicU64,
    closed: AtomicBool,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            next_sequence: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn ensure_open(&self) -> Result<(), RepositoryError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(RepositoryError::Closed);
        }
        Ok(())
    }
}

impl Default for InMemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientStorePort for InMemoryClientStore {
    async fn find_all(&self) -> Result<Vec<Client>, RepositoryError> {
        self.ensure_open()?;

        let mut entries: Vec<(u64, Client)> = self
            .documents
            .iter()
            .map(|entry| (entry.sequence, entry.client.clone()))
            .collect();
        entries.sort_by_key(|(sequence, _)| *sequence);

        Ok(entries.into_iter().map(|(_, client)| client).collect())
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError> {
        self.ensure_open()?;
        Ok(self.documents.get(id).map(|entry| entry.client.clone()))
    }

    async fn insert(&self, client: &NewClient) -> Result<InsertOutcome, RepositoryError> {
        self.ensure_open()?;

        let id = ClientId::new();
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        self.documents.insert(
            id,
            StoredClient {
                sequence,
                client: Client::new(id, client.clone()),
            },
        );

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn delete_by_id(&self, id: &ClientId) -> Result<DeleteOutcome, RepositoryError> {
        self.ensure_open()?;

        let deleted_count = u64::from(self.documents.remove(id).is_some());
        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        tracing::info!(documents = self.documents.len(), "In-memory client store closed");
    }
}
