//! Client Store Port - 出站端口
//!
//! 文档存储的抽象接口：find-all / find-by-id / insert / delete-by-id。
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::client::{Client, ClientId, NewClient};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Store closed")]
    Closed,
}

/// 插入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// 存储是否确认写入
    pub acknowledged: bool,
    /// 存储分配的 ID
    pub inserted_id: ClientId,
}

/// 删除结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Client Store Port
///
/// 每个操作在存储端独立原子，调用方不做跨操作事务。
#[async_trait]
pub trait ClientStorePort: Send + Sync {
    /// 按插入顺序返回全部客户
    async fn find_all(&self) -> Result<Vec<Client>, RepositoryError>;

    /// 根据 ID 查找客户
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError>;

    /// 插入新文档，ID 由存储分配
    async fn insert(&self, client: &NewClient) -> Result<InsertOutcome, RepositoryError>;

    /// 根据 ID 删除
    async fn delete_by_id(&self, id: &ClientId) -> Result<DeleteOutcome, RepositoryError>;

    /// 关闭存储连接
    async fn close(&self);
}
