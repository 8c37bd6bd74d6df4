use crate::lifecycle::LifecycleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbLinkError>;

#[derive(Debug, Error)]
pub enum DbLinkError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Invalid configuration for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    #[error("Module registration failed: {message}")]
    ModuleRegistrationFailed { message: String },

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl DbLinkError {
    pub(crate) fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }
}
