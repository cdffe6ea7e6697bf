//! HTTP Routes
//!
//! API Endpoints:
//! - /api/clients        GET     列出所有客户
//! - /api/clients        POST    创建客户
//! - /api/clients        DELETE  缺少 ID（400）
//! - /api/clients/{id}   GET     获取客户详情
//! - /api/clients/{id}   DELETE  删除客户
//! - /api/*              其余路径 404、不支持的方法 405，均为 JSON 错误体
//!
//! Pages:
//! - /                   302 → /clients/list
//! - /clients/list       客户列表页
//! - /clients/add        添加客户页
//! - 其余路径            public 目录下的静态文件

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(public_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .merge(page_routes(public_dir))
        .fallback_service(ServeDir::new(public_dir))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/clients", client_collection_routes())
        .route("/clients/", client_collection_routes())
        .route(
            "/clients/:id",
            get(handlers::get_client)
                .delete(handlers::delete_client)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::unknown_endpoint)
}

fn client_collection_routes() -> axum::routing::MethodRouter<Arc<AppState>> {
    post(handlers::create_client)
        .get(handlers::list_clients)
        .delete(handlers::delete_client_without_id)
        .fallback(handlers::method_not_allowed)
}

/// 页面路由
fn page_routes(public_dir: &Path) -> Router<Arc<AppState>> {
    let html_dir = public_dir.join("html");

    Router::new()
        .route("/", get(handlers::index))
        .route_service(
            handlers::CLIENT_LIST_PAGE,
            ServeFile::new(html_dir.join("client-list.html")),
        )
        .route_service("/clients/add", ServeFile::new(html_dir.join("client-add.html")))
}
