//! Persistence Layer - 数据持久化
//!
//! SQLite 文档存储实现，以及按配置选择存储后端

pub mod sqlite;

use std::sync::Arc;

pub use self::sqlite::SqliteClientStore;

use crate::application::ports::ClientStorePort;
use crate::config::DatabaseConfig as StoreSettings;
use crate::infrastructure::memory::InMemoryClientStore;

/// 按配置打开客户存储
///
/// `memory:` 使用内存存储；其余 URI 交给 SQLite，连接后执行迁移
pub async fn open_client_store(
    settings: &StoreSettings,
) -> Result<Arc<dyn ClientStorePort>, sqlx::Error> {
    if settings.is_in_memory() {
        tracing::info!("Using in-memory client store");
        return Ok(Arc::new(InMemoryClientStore::new()));
    }

    let db_config = sqlite::DatabaseConfig {
        database_url: settings.uri.clone(),
        max_connections: settings.max_connections,
    };
    let pool = sqlite::create_pool(&db_config).await?;
    sqlite::run_migrations(&pool, &settings.collection).await?;

    Ok(Arc::new(SqliteClientStore::new(
        pool,
        settings.collection.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::NewClient;

    fn ada() -> NewClient {
        NewClient::new(
            Some("Ada".to_string()),
            Some("Lovelace".to_string()),
            Some("ada@x.io".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_memory_store() {
        let settings = StoreSettings {
            uri: "memory:".to_string(),
            ..StoreSettings::default()
        };
        let store = open_client_store(&settings).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let settings = StoreSettings {
            uri: format!("sqlite:{}?mode=rwc", dir.path().join("clients.db").display()),
            collection: "Clients".to_string(),
            max_connections: 2,
        };

        let store = open_client_store(&settings).await.unwrap();
        let outcome = store.insert(&ada()).await.unwrap();
        store.close().await;

        let reopened = open_client_store(&settings).await.unwrap();
        let found = reopened.find_by_id(&outcome.inserted_id).await.unwrap();
        assert_eq!(found.map(|c| c.email().to_string()), Some("ada@x.io".to_string()));
        reopened.close().await;
    }
}
