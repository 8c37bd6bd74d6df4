//! Lifecycle-specific error types

use crate::database::DatabaseError;
use thiserror::Error;

/// Errors that can occur during lifecycle operations
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Application could not be assembled
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// The database client refused the initial connection
    #[error("Failed to connect to the database: {0}")]
    ConnectionFailed(#[source] DatabaseError),

    /// The database client failed while closing its connection
    #[error("Failed to disconnect from the database: {0}")]
    DisconnectFailed(#[source] DatabaseError),

    /// Operation timed out
    #[error("Timeout during {phase}: {message}")]
    Timeout {
        /// The lifecycle phase where timeout occurred
        phase: String,
        /// Additional error message
        message: String,
    },

    /// Hook execution failed
    #[error("Hook execution failed for {service}: {source}")]
    HookFailed {
        /// Name of the service that failed
        service: String,
        /// The error returned by the hook
        #[source]
        source: Box<LifecycleError>,
    },
}

impl LifecycleError {
    /// Create an initialization failure error
    pub fn init_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Timeout {
            phase: phase.into(),
            message: message.into(),
        }
    }

    /// Create a hook failure error wrapping the hook's own error
    pub fn hook_failed(service: impl Into<String>, source: LifecycleError) -> Self {
        Self::HookFailed {
            service: service.into(),
            source: Box::new(source),
        }
    }

    /// The database error behind this failure, looking through hook wrappers
    pub fn database_error(&self) -> Option<&DatabaseError> {
        match self {
            Self::ConnectionFailed(e) | Self::DisconnectFailed(e) => Some(e),
            Self::HookFailed { source, .. } => source.database_error(),
            _ => None,
        }
    }
}

/// A specialized Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_hook_failure_keeps_database_error() {
        let cause = DatabaseError::Unreachable("db:5432".to_string());
        let err = LifecycleError::hook_failed(
            "DatabaseService",
            LifecycleError::ConnectionFailed(cause.clone()),
        );

        assert_eq!(err.database_error(), Some(&cause));
        assert!(err.to_string().contains("DatabaseService"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_timeout_has_no_database_error() {
        let err = LifecycleError::timeout("OnModuleInit", "Timeout after 1s");
        assert!(err.database_error().is_none());
        assert_eq!(err.to_string(), "Timeout during OnModuleInit: Timeout after 1s");
    }
}
