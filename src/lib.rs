//! # dblink
//!
//! Binds a database client to an application's lifecycle: the connection
//! opens while the application starts and closes while it stops.
//!
//! - **Database adapter**: [`DatabaseService`] connects on `OnModuleInit`,
//!   disconnects on `OnModuleDestroy`, and fails startup loudly when the
//!   database is unreachable
//! - **Client seam**: any [`DatabaseClient`] (in-memory, or SeaORM behind the
//!   `sea-orm-db` feature) is injected by composition
//! - **Dependency Injection**: a type-map [`Container`] with trait bindings
//! - **Lifecycle host**: [`Application`] runs init hooks in order and destroy
//!   hooks in reverse, with optional phase timeouts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dblink::prelude::*;
//! use dblink::database::{DatabaseClient, DatabaseModule, DatabaseService, MemoryClient};
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut container = ContainerBuilder::new()
//!         .register(MemoryClient::new())
//!         .bind::<dyn DatabaseClient, MemoryClient, _>(|c| c as Arc<dyn DatabaseClient>)
//!         .build();
//!     DatabaseModule::register(&mut container)?;
//!
//!     let database = container.resolve::<RwLock<DatabaseService>>()?;
//!     let app = Application::builder()
//!         .container(container)
//!         .register_lifecycle(database, "DatabaseService")
//!         .build()
//!         .await?;
//!
//!     shutdown_signal().await;
//!     app.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod di;
pub mod error;
pub mod lifecycle;
pub mod module;

#[cfg(test)]
mod test_support;

// Re-export core types
pub use database::{DatabaseClient, DatabaseError, DatabaseService};
pub use di::{Container, ContainerBuilder, Injectable};
pub use error::{DbLinkError, Result};
pub use lifecycle::Application;
pub use module::Module;

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;

/// Prelude module for convenient imports
///
/// ```
/// use dblink::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, DatabaseConfig, LifecycleConfig};
    pub use crate::database::{
        ConnectionState, DatabaseClient, DatabaseError, DatabaseModule, DatabaseService,
    };
    pub use crate::di::{Container, ContainerBuilder, Injectable};
    pub use crate::error::{DbLinkError, Result};
    pub use crate::lifecycle::{
        Application, ApplicationBuilder, LifecycleError, LifecycleManager, OnModuleDestroy,
        OnModuleInit, ShutdownHandler, shutdown_signal,
    };
    pub use crate::module::Module;
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
    pub use tokio::sync::RwLock;
}
