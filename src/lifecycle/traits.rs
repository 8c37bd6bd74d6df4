//! Lifecycle hook traits
//!
//! These traits define the contract for services that own an external
//! resource for the lifetime of the application.

use super::LifecycleError;
use async_trait::async_trait;

/// Called once while the application starts, before it does any work
///
/// Returning an error aborts startup: [`ApplicationBuilder::build`] fails and
/// no further init hooks run.
///
/// # Example
///
/// ```rust,ignore
/// use dblink::lifecycle::{OnModuleInit, LifecycleError};
/// use async_trait::async_trait;
///
/// #[async_trait]
/// impl OnModuleInit for CacheService {
///     async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
///         self.pool = create_pool(&self.config).await
///             .map_err(|e| LifecycleError::init_failed(e.to_string()))?;
///         Ok(())
///     }
/// }
/// ```
///
/// [`ApplicationBuilder::build`]: super::ApplicationBuilder::build
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    /// Called when the module is initialized
    async fn on_module_init(&mut self) -> Result<(), LifecycleError>;
}

/// Called once while the application shuts down
///
/// # Note
///
/// Services are destroyed in **reverse order** of their registration.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    /// Called when the module is being destroyed
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError>;
}
