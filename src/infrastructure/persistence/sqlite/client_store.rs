//! SQLite Client Store
//!
//! 以 JSON 文档形式保存客户记录，一个集合对应一张表

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{
    ClientStorePort, DeleteOutcome, InsertOutcome, RepositoryError,
};
use crate::domain::client::{Client, ClientId, NewClient};

/// SQLite Client Store
pub struct SqliteClientStore {
    pool: DbPool,
    collection: String,
}

impl SqliteClientStore {
    /// `collection` 须已通过 `run_migrations` 建表
    pub fn new(pool: DbPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }
}

#[derive(FromRow)]
struct ClientRow {
    id: String,
    document: String,
}

impl TryFrom<ClientRow> for Client {
    type Error = RepositoryError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let document: NewClient = serde_json::from_str(&row.document)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Client::new(ClientId::from_uuid(id), document))
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolClosed => RepositoryError::Closed,
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ClientStorePort for SqliteClientStore {
    async fn find_all(&self) -> Result<Vec<Client>, RepositoryError> {
        let rows: Vec<ClientRow> = sqlx::query_as(&format!(
            "SELECT id, document FROM {} ORDER BY created_at, rowid",
            self.collection
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Client::try_from).collect()
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, RepositoryError> {
        let row: Option<ClientRow> = sqlx::query_as(&format!(
            "SELECT id, document FROM {} WHERE id = ?",
            self.collection
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Client::try_from).transpose()
    }

    async fn insert(&self, client: &NewClient) -> Result<InsertOutcome, RepositoryError> {
        let id = ClientId::new();
        let document = serde_json::to_string(client)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        let result = sqlx::query(&format!(
            "INSERT INTO {} (id, document, created_at) VALUES (?, ?, ?)",
            self.collection
        ))
        .bind(id.to_string())
        .bind(document)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Duplicate(id.to_string())
            }
            other => database_error(other),
        })?;

        Ok(InsertOutcome {
            acknowledged: result.rows_affected() == 1,
            inserted_id: id,
        })
    }

    async fn delete_by_id(&self, id: &ClientId) -> Result<DeleteOutcome, RepositoryError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", self.collection))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn store() -> SqliteClientStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool, "clients").await.unwrap();
        SqliteClientStore::new(pool, "clients")
    }

    fn client(first: &str, last: &str) -> NewClient {
        NewClient::new(
            Some(first.to_string()),
            Some(last.to_string()),
            Some(format!("{}@example.com", first.to_lowercase())),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = store().await;
        let outcome = store.insert(&client("Ada", "Lovelace")).await.unwrap();
        assert!(outcome.acknowledged);

        let found = store.find_by_id(&outcome.inserted_id).await.unwrap().unwrap();
        assert_eq!(found.id(), &outcome.inserted_id);
        assert_eq!(found.first_name(), "Ada");
        assert_eq!(found.last_name(), "Lovelace");
        assert_eq!(found.email(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let store = store().await;
        assert!(store.find_all().await.unwrap().is_empty());

        store.insert(&client("Ada", "Lovelace")).await.unwrap();
        store.insert(&client("Grace", "Hopper")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].first_name(), "Ada");
        assert_eq!(all[1].first_name(), "Grace");
    }

    #[tokio::test]
    async fn test_delete_counts_rows() {
        let store = store().await;
        let outcome = store.insert(&client("Ada", "Lovelace")).await.unwrap();

        let deleted = store.delete_by_id(&outcome.inserted_id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);

        let again = store.delete_by_id(&outcome.inserted_id).await.unwrap();
        assert_eq!(again.deleted_count, 0);
        assert!(store.find_by_id(&outcome.inserted_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_closed_pool_reports_closed() {
        let store = store().await;
        store.close().await;
        assert!(matches!(store.find_all().await, Err(RepositoryError::Closed)));
    }

    #[tokio::test]
    async fn test_corrupt_document_is_serialization_error() {
        let store = store().await;
        sqlx::query("INSERT INTO clients (id, document, created_at) VALUES (?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind("{\"firstName\": 1}")
            .bind("2024-01-01T00:00:00.000000Z")
            .execute(&store.pool)
            .await
            .unwrap();

        assert!(matches!(
            store.find_all().await,
            Err(RepositoryError::SerializationError(_))
        ));
    }
}
