use crate::di::Container;
use crate::error::Result;

/// Types that build themselves from dependencies held in the container
///
/// # Example
/// ```
/// use dblink::database::{DatabaseClient, DatabaseService, MemoryClient};
/// use dblink::di::{ContainerBuilder, Injectable};
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .register(MemoryClient::new())
///     .bind::<dyn DatabaseClient, MemoryClient, _>(|c| c as Arc<dyn DatabaseClient>)
///     .build();
///
/// let service = DatabaseService::inject(&container).unwrap();
/// assert!(!service.is_connected());
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
