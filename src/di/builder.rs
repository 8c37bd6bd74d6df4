use crate::di::Container;
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// # Example
/// ```
/// use dblink::database::{DatabaseClient, MemoryClient};
/// use dblink::di::ContainerBuilder;
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .register(MemoryClient::new())
///     .bind::<dyn DatabaseClient, MemoryClient, _>(|c| c as Arc<dyn DatabaseClient>)
///     .build();
///
/// assert!(container.resolve_trait::<dyn DatabaseClient>().is_ok());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Register a service instance that is also held elsewhere
    pub fn register_arc<T: 'static + Send + Sync>(mut self, instance: Arc<T>) -> Self {
        self.container.register_arc(instance);
        self
    }

    /// Bind a trait to a concrete implementation
    ///
    /// This enables resolving `Arc<dyn Trait>` to the registered implementation.
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
