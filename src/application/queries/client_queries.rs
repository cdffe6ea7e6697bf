//! Client Queries

use crate::domain::client::ClientId;

/// 获取客户详情查询
#[derive(Debug, Clone)]
pub struct GetClient {
    pub client_id: ClientId,
}

/// 列出所有客户查询
#[derive(Debug, Clone)]
pub struct ListClients;
