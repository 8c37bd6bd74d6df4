//! Database connection lifecycle
//!
//! [`DatabaseService`] wraps any [`DatabaseClient`] and ties its connection to
//! the application lifecycle: connect during `OnModuleInit`, disconnect
//! during `OnModuleDestroy`.

mod client;
mod memory;
#[cfg(feature = "sea-orm-db")]
mod seaorm;
mod service;

pub use client::{DatabaseClient, DatabaseError};
pub use memory::{ClientCall, MemoryClient};
#[cfg(feature = "sea-orm-db")]
pub use seaorm::SeaOrmClient;
pub use service::{ConnectionState, DatabaseService};

use crate::di::{Container, Injectable};
use crate::error::{DbLinkError, Result};
use crate::module::Module;
use tokio::sync::RwLock;

/// Registers `RwLock<DatabaseService>` built from the bound `dyn DatabaseClient`
pub struct DatabaseModule;

impl Module for DatabaseModule {
    fn register(container: &mut Container) -> Result<()> {
        let service = DatabaseService::inject(container).map_err(|e| {
            DbLinkError::ModuleRegistrationFailed {
                message: format!("DatabaseModule: {}", e),
            }
        })?;
        container.register(RwLock::new(service));
        tracing::debug!("Registered DatabaseService");
        Ok(())
    }
}
