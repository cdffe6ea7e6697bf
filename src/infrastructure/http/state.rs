//! Application State
//!
//! 持有存储句柄及所有 Command/Query Handlers；由 main 创建后注入路由

use std::sync::Arc;

use crate::application::{
    ClientStorePort, CreateClientHandler, DeleteClientHandler, GetClientHandler,
    ListClientsHandler,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_client_handler: CreateClientHandler,
    pub delete_client_handler: DeleteClientHandler,

    // ========== Query Handlers ==========
    pub get_client_handler: GetClientHandler,
    pub list_clients_handler: ListClientsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(client_store: Arc<dyn ClientStorePort>) -> Self {
        Self {
            create_client_handler: CreateClientHandler::new(client_store.clone()),
            delete_client_handler: DeleteClientHandler::new(client_store.clone()),

            get_client_handler: GetClientHandler::new(client_store.clone()),
            list_clients_handler: ListClientsHandler::new(client_store),
        }
    }
}
