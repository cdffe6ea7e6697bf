//! Client HTTP Handlers
//!
//! 每个处理器：校验输入 → 一次存储操作 → 状态码/JSON

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateClient, DeleteClient, GetClient, ListClients};
use crate::domain::client::{Client, ClientId, NewClient};
use crate::infrastructure::http::dto::CreateClientRequest;
use crate::infrastructure::http::error::{message, ApiError};
use crate::infrastructure::http::state::AppState;

/// 获取客户列表
pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.list_clients_handler.handle(ListClients).await?;
    Ok(Json(clients))
}

/// 获取客户详情
pub async fn get_client(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Client>, ApiError> {
    let Path(raw_id) = id?;
    let client_id = ClientId::parse(&raw_id)?;

    let client = state
        .get_client_handler
        .handle(GetClient { client_id })
        .await?;

    Ok(Json(client))
}

/// 创建客户，成功返回 201 与 Location
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let client = NewClient::try_from(req)?;

    let created = state
        .create_client_handler
        .handle(CreateClient { client })
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/clients/{}", created.id))],
    ))
}

/// 删除客户，成功返回 204
pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(raw_id) = id?;
    let client_id = ClientId::parse(&raw_id)?;

    state
        .delete_client_handler
        .handle(DeleteClient { client_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/clients` 未携带 ID
pub async fn delete_client_without_id() -> ApiError {
    ApiError::BadRequest(message::MISSING_ID.to_string())
}

/// 客户路由上不支持的方法
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// `/api` 下未匹配的路径
pub async fn unknown_endpoint() -> ApiError {
    ApiError::NotFound(message::NO_SUCH_ENDPOINT.to_string())
}
