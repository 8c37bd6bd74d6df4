use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module registers its providers into the container. The composition root
/// calls `register` once per module before building the application.
///
/// # Example
/// ```
/// use dblink::database::{DatabaseClient, DatabaseModule, DatabaseService, MemoryClient};
/// use dblink::di::ContainerBuilder;
/// use dblink::module::Module;
/// use std::sync::Arc;
/// use tokio::sync::RwLock;
///
/// let mut container = ContainerBuilder::new()
///     .register(MemoryClient::new())
///     .bind::<dyn DatabaseClient, MemoryClient, _>(|c| c as Arc<dyn DatabaseClient>)
///     .build();
/// DatabaseModule::register(&mut container).unwrap();
///
/// assert!(container.contains::<RwLock<DatabaseService>>());
/// ```
pub trait Module {
    /// Register all providers in this module
    fn register(container: &mut Container) -> Result<()>;
}
