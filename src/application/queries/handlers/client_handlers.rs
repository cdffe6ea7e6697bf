//! Client Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ClientStorePort;
use crate::application::queries::{GetClient, ListClients};
use crate::domain::client::Client;

/// GetClient Handler
pub struct GetClientHandler {
    client_store: Arc<dyn ClientStorePort>,
}

impl GetClientHandler {
    pub fn new(client_store: Arc<dyn ClientStorePort>) -> Self {
        Self { client_store }
    }

    pub async fn handle(&self, query: GetClient) -> Result<Client, ApplicationError> {
        self.client_store
            .find_by_id(&query.client_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Client", query.client_id))
    }
}

/// ListClients Handler
pub struct ListClientsHandler {
    client_store: Arc<dyn ClientStorePort>,
}

impl ListClientsHandler {
    pub fn new(client_store: Arc<dyn ClientStorePort>) -> Self {
        Self { client_store }
    }

    pub async fn handle(&self, _query: ListClients) -> Result<Vec<Client>, ApplicationError> {
        Ok(self.client_store.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ClientId, NewClient};
    use crate::infrastructure::memory::InMemoryClientStore;

    #[tokio::test]
    async fn test_list_empty_store() {
        let handler = ListClientsHandler::new(Arc::new(InMemoryClientStore::new()));
        assert!(handler.handle(ListClients).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let handler = GetClientHandler::new(Arc::new(InMemoryClientStore::new()));
        let err = handler
            .handle(GetClient {
                client_id: ClientId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_existing_client() {
        let store = Arc::new(InMemoryClientStore::new());
        let client = NewClient::new(
            Some("Grace".to_string()),
            Some("Hopper".to_string()),
            Some("grace@navy.mil".to_string()),
        )
        .unwrap();
        let outcome = store.insert(&client).await.unwrap();

        let handler = GetClientHandler::new(store);
        let found = handler
            .handle(GetClient {
                client_id: outcome.inserted_id,
            })
            .await
            .unwrap();
        assert_eq!(found.last_name(), "Hopper");
    }
}
