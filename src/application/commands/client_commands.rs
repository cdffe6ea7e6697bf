//! Client Commands

use crate::domain::client::{ClientId, NewClient};

/// 创建客户命令（字段已校验）
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub client: NewClient,
}

/// 删除客户命令
#[derive(Debug, Clone)]
pub struct DeleteClient {
    pub client_id: ClientId,
}
