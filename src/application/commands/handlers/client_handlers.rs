//! Client Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateClient, DeleteClient};
use crate::application::error::ApplicationError;
use crate::application::ports::ClientStorePort;
use crate::domain::client::ClientId;

// ============================================================================
// CreateClient
// ============================================================================

/// 创建客户响应
#[derive(Debug, Clone)]
pub struct CreateClientResponse {
    pub id: ClientId,
}

/// CreateClient Handler
pub struct CreateClientHandler {
    client_store: Arc<dyn ClientStorePort>,
}

impl CreateClientHandler {
    pub fn new(client_store: Arc<dyn ClientStorePort>) -> Self {
        Self { client_store }
    }

    pub async fn handle(
        &self,
        command: CreateClient,
    ) -> Result<CreateClientResponse, ApplicationError> {
        let client = command.client;
        let outcome = self.client_store.insert(&client).await?;

        if !outcome.acknowledged {
            tracing::warn!(
                first_name = %client.first_name(),
                last_name = %client.last_name(),
                email = %client.email(),
                "Failed to add client to database"
            );
            return Err(ApplicationError::WriteNotAcknowledged(
                "insert of client document".to_string(),
            ));
        }

        tracing::info!(
            client_id = %outcome.inserted_id,
            first_name = %client.first_name(),
            last_name = %client.last_name(),
            email = %client.email(),
            "Added client to database"
        );

        Ok(CreateClientResponse {
            id: outcome.inserted_id,
        })
    }
}

// ============================================================================
// DeleteClient
// ============================================================================

/// DeleteClient Handler
pub struct DeleteClientHandler {
    client_store: Arc<dyn ClientStorePort>,
}

impl DeleteClientHandler {
    pub fn new(client_store: Arc<dyn ClientStorePort>) -> Self {
        Self { client_store }
    }

    /// 删除数为 0 视为未找到；删除数大于 0 即成功，不看确认标志
    pub async fn handle(&self, command: DeleteClient) -> Result<(), ApplicationError> {
        let client_id = command.client_id;
        let outcome = self.client_store.delete_by_id(&client_id).await?;

        if outcome.deleted_count == 0 {
            tracing::info!(client_id = %client_id, "Failed to delete client, no records matched");
            return Err(ApplicationError::nothing_deleted("Client", client_id));
        }

        if !outcome.acknowledged {
            tracing::warn!(client_id = %client_id, "Client delete not acknowledged by store");
        }

        tracing::info!(client_id = %client_id, "Deleted client");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::{DeleteOutcome, InsertOutcome, RepositoryError};
    use crate::domain::client::{Client, NewClient};
    use crate::infrastructure::memory::InMemoryClientStore;

    fn ada() -> NewClient {
        NewClient::new(
            Some("Ada".to_string()),
            Some("Lovelace".to_string()),
            Some("ada@x.io".to_string()),
        )
        .unwrap()
    }

    /// 始终不确认写入、删除时报告已删除但未确认的存储
    struct UnacknowledgedStore;

    #[async_trait]
    impl ClientStorePort for UnacknowledgedStore {
        async fn find_all(&self) -> Result<Vec<Client>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: &ClientId) -> Result<Option<Client>, RepositoryError> {
            Ok(None)
        }

        async fn insert(&self, _client: &NewClient) -> Result<InsertOutcome, RepositoryError> {
            Ok(InsertOutcome {
                acknowledged: false,
                inserted_id: ClientId::new(),
            })
        }

        async fn delete_by_id(&self, _id: &ClientId) -> Result<DeleteOutcome, RepositoryError> {
            Ok(DeleteOutcome {
                acknowledged: false,
                deleted_count: 1,
            })
        }

        async fn close(&self) {}
    }

    #[tokio::test]
    async fn test_create_persists_document() {
        let store = Arc::new(InMemoryClientStore::new());
        let handler = CreateClientHandler::new(store.clone());

        let response = handler.handle(CreateClient { client: ada() }).await.unwrap();

        let stored = store.find_by_id(&response.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name(), "Ada");
        assert_eq!(stored.email(), "ada@x.io");
    }

    #[tokio::test]
    async fn test_create_without_ack_fails() {
        let handler = CreateClientHandler::new(Arc::new(UnacknowledgedStore));

        let err = handler.handle(CreateClient { client: ada() }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::WriteNotAcknowledged(_)));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_nothing_deleted() {
        let store = Arc::new(InMemoryClientStore::new());
        let created = CreateClientHandler::new(store.clone())
            .handle(CreateClient { client: ada() })
            .await
            .unwrap();
        let handler = DeleteClientHandler::new(store.clone());

        handler
            .handle(DeleteClient { client_id: created.id })
            .await
            .unwrap();
        let err = handler
            .handle(DeleteClient { client_id: created.id })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NothingDeleted { .. }));
    }

    #[tokio::test]
    async fn test_delete_count_wins_over_ack_flag() {
        let handler = DeleteClientHandler::new(Arc::new(UnacknowledgedStore));
        let result = handler
            .handle(DeleteClient {
                client_id: ClientId::new(),
            })
            .await;
        assert!(result.is_ok());
    }
}
