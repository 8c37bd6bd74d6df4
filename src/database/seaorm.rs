use super::{DatabaseClient, DatabaseError};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection, DbErr};
use tokio::sync::Mutex;

impl From<DbErr> for DatabaseError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(e) => DatabaseError::Unreachable(e.to_string()),
            other => DatabaseError::Client(other.to_string()),
        }
    }
}

/// SeaORM-backed client
pub struct SeaOrmClient {
    config: DatabaseConfig,
    connection: Mutex<Option<DatabaseConnection>>,
}

impl SeaOrmClient {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            connection: Mutex::new(None),
        }
    }

    /// Handle for running queries, once connected
    pub async fn connection(&self) -> Option<DatabaseConnection> {
        self.connection.lock().await.clone()
    }
}

#[async_trait]
impl DatabaseClient for SeaOrmClient {
    async fn connect(&self) -> Result<(), DatabaseError> {
        let connection = Database::connect(self.config.url.as_str()).await?;
        *self.connection.lock().await = Some(connection);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DatabaseError> {
        let connection = self
            .connection
            .lock()
            .await
            .take()
            .ok_or(DatabaseError::NotConnected)?;
        connection.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    fn client(url: &str) -> SeaOrmClient {
        SeaOrmClient::new(DatabaseConfig {
            url: url.to_string(),
        })
    }

    #[test]
    fn test_db_err_mapping() {
        let refused = DbErr::Conn(RuntimeErr::Internal("connection refused".to_string()));
        assert!(matches!(
            DatabaseError::from(refused),
            DatabaseError::Unreachable(ref msg) if msg.contains("connection refused")
        ));

        let other = DatabaseError::from(DbErr::Custom("bad row".to_string()));
        assert!(matches!(other, DatabaseError::Client(ref msg) if msg.contains("bad row")));
    }

    #[tokio::test]
    async fn test_disconnect_before_connect() {
        let client = client("postgres://localhost/app");
        assert_eq!(client.disconnect().await, Err(DatabaseError::NotConnected));
    }

    #[tokio::test]
    async fn test_connect_with_malformed_url_fails() {
        let client = client("not-a-database-url");

        assert!(client.connect().await.is_err());
        assert!(client.connection().await.is_none());
        assert_eq!(client.disconnect().await, Err(DatabaseError::NotConnected));
    }
}
