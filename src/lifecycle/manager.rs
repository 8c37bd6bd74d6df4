//! Lifecycle Manager
//!
//! Manages the registration and execution of lifecycle hooks.

use super::{LifecycleError, OnModuleDestroy, OnModuleInit, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// A registered service together with the name used in logs and errors
struct LifecycleHook<T: ?Sized> {
    service: Arc<RwLock<T>>,
    name: String,
}

impl<T: ?Sized> LifecycleHook<T> {
    fn new(service: Arc<RwLock<T>>, name: impl Into<String>) -> Self {
        Self {
            service,
            name: name.into(),
        }
    }
}

/// Runs init and destroy hooks for all registered services
///
/// Init hooks run in registration order and stop at the first failure.
/// Destroy hooks run in reverse order and always all run. The destroy phase
/// runs at most once; later calls return `Ok` without touching any hook.
///
/// # Example
///
/// ```rust,ignore
/// use dblink::lifecycle::LifecycleManager;
///
/// let mut manager = LifecycleManager::new();
/// manager.register_init(db_service.clone(), "DatabaseService");
/// manager.register_destroy(db_service, "DatabaseService");
///
/// manager.call_module_init().await?;
/// // ... application runs ...
/// manager.call_module_destroy().await?;
/// ```
pub struct LifecycleManager {
    on_init_hooks: Vec<LifecycleHook<dyn OnModuleInit>>,
    on_destroy_hooks: Vec<LifecycleHook<dyn OnModuleDestroy>>,
    destroyed: AtomicBool,
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleManager {
    /// Create a new LifecycleManager
    pub fn new() -> Self {
        Self {
            on_init_hooks: Vec::new(),
            on_destroy_hooks: Vec::new(),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Register a service that implements OnModuleInit
    pub fn register_init<T>(&mut self, service: Arc<RwLock<T>>, name: impl Into<String>)
    where
        T: OnModuleInit + 'static,
    {
        self.on_init_hooks.push(LifecycleHook::new(service, name));
    }

    /// Register a service that implements OnModuleDestroy
    pub fn register_destroy<T>(&mut self, service: Arc<RwLock<T>>, name: impl Into<String>)
    where
        T: OnModuleDestroy + 'static,
    {
        self.on_destroy_hooks.push(LifecycleHook::new(service, name));
    }

    /// Execute all OnModuleInit hooks
    ///
    /// Hooks are executed in the order they were registered. The first
    /// failing hook aborts the phase.
    pub async fn call_module_init(&self) -> Result<()> {
        tracing::info!("Calling OnModuleInit hooks...");

        for hook in &self.on_init_hooks {
            tracing::debug!("Initializing: {}", hook.name);
            let mut service = hook.service.write().await;
            service.on_module_init().await.map_err(|e| {
                tracing::error!("OnModuleInit failed for {}: {}", hook.name, e);
                LifecycleError::hook_failed(&hook.name, e)
            })?;
            tracing::debug!("Initialized: {}", hook.name);
        }

        tracing::info!(
            "OnModuleInit complete ({} hooks executed)",
            self.on_init_hooks.len()
        );
        Ok(())
    }

    /// Execute all OnModuleInit hooks with a timeout
    pub async fn call_module_init_with_timeout(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.call_module_init())
            .await
            .map_err(|_| {
                tracing::error!("OnModuleInit timed out after {:?}", timeout);
                LifecycleError::timeout("OnModuleInit", format!("Timeout after {:?}", timeout))
            })?
    }

    /// Execute all OnModuleDestroy hooks
    ///
    /// Hooks are executed in **reverse order**. A failing hook is logged and
    /// the remaining hooks still run.
    pub async fn call_module_destroy(&self) -> Result<()> {
        if let Err(e) = self.run_destroy_hooks().await {
            tracing::warn!("OnModuleDestroy finished with errors: {}", e);
        }
        Ok(())
    }

    /// Execute all OnModuleDestroy hooks, reporting the first failure
    ///
    /// Every hook still runs; the error is returned after the last one.
    pub async fn call_module_destroy_strict(&self) -> Result<()> {
        self.run_destroy_hooks().await
    }

    /// Execute all OnModuleDestroy hooks with a timeout
    pub async fn call_module_destroy_with_timeout(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.call_module_destroy())
            .await
            .map_err(|_| {
                tracing::error!("OnModuleDestroy timed out after {:?}", timeout);
                LifecycleError::timeout("OnModuleDestroy", format!("Timeout after {:?}", timeout))
            })?
    }

    async fn run_destroy_hooks(&self) -> Result<()> {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            tracing::debug!("OnModuleDestroy already ran, skipping");
            return Ok(());
        }

        tracing::info!("Calling OnModuleDestroy hooks...");

        let mut first_error = None;
        for hook in self.on_destroy_hooks.iter().rev() {
            tracing::debug!("Destroying: {}", hook.name);
            let mut service = hook.service.write().await;
            if let Err(e) = service.on_module_destroy().await {
                tracing::error!("OnModuleDestroy failed for {}: {}", hook.name, e);
                if first_error.is_none() {
                    first_error = Some(LifecycleError::hook_failed(&hook.name, e));
                }
            }
            tracing::debug!("Destroyed: {}", hook.name);
        }

        tracing::info!(
            "OnModuleDestroy complete ({} hooks executed)",
            self.on_destroy_hooks.len()
        );
        first_error.map_or(Ok(()), Err)
    }

    /// Get the number of registered init hooks
    pub fn init_hook_count(&self) -> usize {
        self.on_init_hooks.len()
    }

    /// Get the number of registered destroy hooks
    pub fn destroy_hook_count(&self) -> usize {
        self.on_destroy_hooks.len()
    }

    /// Whether the destroy phase has started
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }
}
