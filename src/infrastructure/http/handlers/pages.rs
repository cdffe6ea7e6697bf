//! Page Handlers

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// 客户列表页路径
pub const CLIENT_LIST_PAGE: &str = "/clients/list";

/// 根路径 302 跳转到客户列表页
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, CLIENT_LIST_PAGE)])
}
