use super::DatabaseClient;
use crate::di::{Container, Injectable};
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use async_trait::async_trait;
use std::sync::Arc;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// Owns when the database client connects and disconnects
///
/// Register it with the lifecycle host so the connection opens during
/// startup and closes during shutdown. Query code reaches the client
/// through [`DatabaseService::client`].
pub struct DatabaseService {
    client: Arc<dyn DatabaseClient>,
    state: ConnectionState,
}

impl DatabaseService {
    pub fn new(client: Arc<dyn DatabaseClient>) -> Self {
        Self {
            client,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn client(&self) -> &Arc<dyn DatabaseClient> {
        &self.client
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }
}

impl Injectable for DatabaseService {
    fn inject(container: &Container) -> crate::Result<Self> {
        let client = container.resolve_trait::<dyn DatabaseClient>()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl OnModuleInit for DatabaseService {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
        match self.client.connect().await {
            Ok(()) => {
                self.state = ConnectionState::Connected;
                tracing::info!("Successfully connected to the database");
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, "Failed to connect to the database");
                Err(LifecycleError::ConnectionFailed(error))
            }
        }
    }
}

#[async_trait]
impl OnModuleDestroy for DatabaseService {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError> {
        tracing::debug!(state = %self.state, "Closing database connection");
        self.client
            .disconnect()
            .await
            .map_err(LifecycleError::DisconnectFailed)?;
        self.state = ConnectionState::Disconnected;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{ClientCall, DatabaseError, MemoryClient};
    use crate::test_support::capture;
    use tracing::Level;

    #[tokio::test]
    async fn test_init_connects_and_logs_once() {
        let (events, _guard) = capture();
        let client = Arc::new(MemoryClient::new());
        let mut service = DatabaseService::new(client.clone());

        service.on_module_init().await.unwrap();

        assert_eq!(service.state(), ConnectionState::Connected);
        assert_eq!(client.connect_calls(), 1);
        assert_eq!(events.len(), 1);
        let info = events.at(Level::INFO);
        assert_eq!(info.len(), 1);
        assert!(info[0].contains("Successfully connected to the database"));
    }

    #[tokio::test]
    async fn test_init_failure_logs_and_returns_same_error() {
        let (events, _guard) = capture();
        let cause = DatabaseError::Authentication("password rejected for app".to_string());
        let client = Arc::new(MemoryClient::new().fail_connect_with(cause.clone()));
        let mut service = DatabaseService::new(client.clone());

        let err = service.on_module_init().await.unwrap_err();

        match err {
            LifecycleError::ConnectionFailed(e) => assert_eq!(e, cause),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(service.state(), ConnectionState::Disconnected);

        assert_eq!(events.len(), 1);
        let errors = events.at(Level::ERROR);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Failed to connect to the database"));
        assert!(errors[0].contains("password rejected for app"));
    }

    #[tokio::test]
    async fn test_failed_connect_is_not_retried() {
        let client = Arc::new(
            MemoryClient::new().fail_connect_with(DatabaseError::Unreachable("timeout".into())),
        );
        let mut service = DatabaseService::new(client.clone());

        assert!(service.on_module_init().await.is_err());
        assert_eq!(client.connect_calls(), 1);
        assert_eq!(client.calls(), vec![ClientCall::Connect]);
    }

    #[tokio::test]
    async fn test_destroy_disconnects_once() {
        let client = Arc::new(MemoryClient::new());
        let mut service = DatabaseService::new(client.clone());

        service.on_module_destroy().await.unwrap();

        assert_eq!(client.disconnect_calls(), 1);
        assert_eq!(client.connect_calls(), 0);
    }

    #[tokio::test]
    async fn test_init_then_destroy_in_order() {
        let client = Arc::new(MemoryClient::new());
        let mut service = DatabaseService::new(client.clone());

        service.on_module_init().await.unwrap();
        assert!(service.is_connected());
        service.on_module_destroy().await.unwrap();

        assert!(!service.is_connected());
        assert_eq!(client.calls(), vec![ClientCall::Connect, ClientCall::Disconnect]);
    }

    #[tokio::test]
    async fn test_destroy_failure_propagates_without_logging() {
        let (events, _guard) = capture();
        let client = Arc::new(
            MemoryClient::new().fail_disconnect_with(DatabaseError::Client("socket closed".into())),
        );
        let mut service = DatabaseService::new(client.clone());
        service.on_module_init().await.unwrap();

        let err = service.on_module_destroy().await.unwrap_err();

        assert!(matches!(err, LifecycleError::DisconnectFailed(DatabaseError::Client(_))));
        assert_eq!(service.state(), ConnectionState::Connected);
        assert!(events.at(Level::ERROR).is_empty());
    }

    #[tokio::test]
    async fn test_client_handle_is_shared() {
        let client = Arc::new(MemoryClient::new());
        let service = DatabaseService::new(client.clone());

        service.client().connect().await.unwrap();

        assert!(client.is_connected());
        assert_eq!(service.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ConnectionState::Connected.to_string(), "Connected");
        assert_eq!(ConnectionState::Disconnected.to_string(), "Disconnected");
    }
}
