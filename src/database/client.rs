use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a database client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    #[error("database unreachable: {0}")]
    Unreachable(String),

    #[error("authentication rejected: {0}")]
    Authentication(String),

    #[error("no open connection")]
    NotConnected,

    #[error("database client error: {0}")]
    Client(String),
}

/// The connection surface a lifecycle adapter needs from a database client
///
/// Query execution, pooling and retries stay with the implementation; the
/// adapter only decides when to open and close.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Open the connection
    async fn connect(&self) -> Result<(), DatabaseError>;

    /// Close the connection
    async fn disconnect(&self) -> Result<(), DatabaseError>;
}
