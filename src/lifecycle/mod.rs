//! Lifecycle Hooks Module
//!
//! Lets services open external resources when the application starts and
//! release them when it stops.
//!
//! # Lifecycle Phases
//!
//! ```text
//! 1. Configuration Loading
//!    ↓
//! 2. DI Container Creation
//!    ↓
//! 3. Module Registration
//!    ↓
//! 4. OnModuleInit (each service, registration order)   ← Lifecycle Hook
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown Signal (SIGTERM/SIGINT)
//!    ↓
//! 6. OnModuleDestroy (each service, reverse order)     ← Lifecycle Hook
//! ```
//!
//! A failing OnModuleInit hook aborts startup. OnModuleDestroy failures are
//! logged and the remaining hooks still run.

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::{ShutdownHandler, shutdown_signal};
pub use traits::{OnModuleDestroy, OnModuleInit};
