//! Application Bootstrap
//!
//! Owns the container and the lifecycle manager for the lifetime of the
//! process, and drives the init and destroy phases.

use super::{
    LifecycleError, LifecycleManager, OnModuleDestroy, OnModuleInit, Result, ShutdownHandler,
};
use crate::config::LifecycleConfig;
use crate::di::Container;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// A started application
///
/// # Example
///
/// ```rust,ignore
/// use dblink::lifecycle::Application;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let app = Application::builder()
///         .container(container)
///         .register_lifecycle(database_service, "DatabaseService")
///         .build()
///         .await?;
///
///     // Serve...
///
///     app.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Application {
    container: Arc<Container>,
    lifecycle_manager: Arc<LifecycleManager>,
    destroy_timeout: Option<Duration>,
}

impl Application {
    /// Create a new application builder
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    /// Get a reference to the container
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Get a reference to the lifecycle manager
    pub fn lifecycle_manager(&self) -> &Arc<LifecycleManager> {
        &self.lifecycle_manager
    }

    /// Create a shutdown handler for graceful shutdown
    pub fn shutdown_handler(&self) -> ShutdownHandler {
        ShutdownHandler::new(Arc::clone(&self.lifecycle_manager))
    }

    /// Perform graceful shutdown
    ///
    /// Runs every OnModuleDestroy hook, in reverse registration order. If a
    /// [`ShutdownHandler`] already ran the destroy phase this does nothing.
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down application...");

        match self.destroy_timeout {
            Some(timeout) => {
                self.lifecycle_manager
                    .call_module_destroy_with_timeout(timeout)
                    .await?
            }
            None => self.lifecycle_manager.call_module_destroy().await?,
        }

        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

/// Builder for Application
pub struct ApplicationBuilder {
    container: Option<Container>,
    lifecycle_manager: LifecycleManager,
    init_timeout: Option<Duration>,
    destroy_timeout: Option<Duration>,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            container: None,
            lifecycle_manager: LifecycleManager::new(),
            init_timeout: None,
            destroy_timeout: None,
        }
    }

    /// Set the DI container
    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Set a timeout for OnModuleInit hooks
    pub fn init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = Some(timeout);
        self
    }

    /// Set a timeout for OnModuleDestroy hooks
    pub fn destroy_timeout(mut self, timeout: Duration) -> Self {
        self.destroy_timeout = Some(timeout);
        self
    }

    /// Apply timeouts from configuration, keeping any already set
    pub fn config(mut self, config: &LifecycleConfig) -> Self {
        self.init_timeout = self.init_timeout.or(config.init_timeout);
        self.destroy_timeout = self.destroy_timeout.or(config.destroy_timeout);
        self
    }

    /// Register a service that implements OnModuleInit
    pub fn on_init<T>(mut self, service: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + 'static,
    {
        self.lifecycle_manager.register_init(service, name);
        self
    }

    /// Register a service that implements OnModuleDestroy
    pub fn on_destroy<T>(mut self, service: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleDestroy + 'static,
    {
        self.lifecycle_manager.register_destroy(service, name);
        self
    }

    /// Register a service for both init and destroy hooks
    pub fn register_lifecycle<T>(self, service: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + OnModuleDestroy + 'static,
    {
        let name = name.into();
        self.on_init(Arc::clone(&service), name.clone())
            .on_destroy(service, name)
    }

    /// Build and initialize the application
    ///
    /// Runs all OnModuleInit hooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is missing or any init hook fails.
    pub async fn build(self) -> Result<Application> {
        let container = self
            .container
            .ok_or_else(|| LifecycleError::init_failed("Container not provided"))?;

        tracing::info!("Starting application initialization...");

        match self.init_timeout {
            Some(timeout) => {
                self.lifecycle_manager
                    .call_module_init_with_timeout(timeout)
                    .await?
            }
            None => self.lifecycle_manager.call_module_init().await?,
        }

        tracing::info!("Application initialization complete");

        Ok(Application {
            container: Arc::new(container),
            lifecycle_manager: Arc::new(self.lifecycle_manager),
            destroy_timeout: self.destroy_timeout,
        })
    }
}
