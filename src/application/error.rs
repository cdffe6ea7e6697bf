//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::client::ClientId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: ClientId,
    },

    /// 删除未命中任何记录
    #[error("{resource_type} not deleted, no record with id {id}")]
    NothingDeleted {
        resource_type: &'static str,
        id: ClientId,
    },

    /// 存储未确认写入
    #[error("Write not acknowledged: {0}")]
    WriteNotAcknowledged(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: ClientId) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建 NothingDeleted 错误
    pub fn nothing_deleted(resource_type: &'static str, id: ClientId) -> Self {
        Self::NothingDeleted { resource_type, id }
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
