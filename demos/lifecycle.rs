//! Wires the whole stack: config, container, module, application, shutdown.
//!
//! ```text
//! RUST_LOG=debug cargo run --example lifecycle
//! ```

use dblink::database::{DatabaseClient, DatabaseModule, DatabaseService, MemoryClient};
use dblink::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ConfigService::new();
    let lifecycle = LifecycleConfig::from_config(&config)?;

    let client = MemoryClient::new().with_latency(Duration::from_millis(100));
    let mut container = ContainerBuilder::new()
        .register(client)
        .bind::<dyn DatabaseClient, MemoryClient, _>(|c| c as Arc<dyn DatabaseClient>)
        .build();
    DatabaseModule::register(&mut container)?;

    let database = container.resolve::<RwLock<DatabaseService>>()?;
    let app = Application::builder()
        .container(container)
        .register_lifecycle(Arc::clone(&database), "DatabaseService")
        .config(&lifecycle)
        .build()
        .await?;

    tracing::info!(state = %database.read().await.state(), "Running, press Ctrl+C to stop");

    shutdown_signal().await;
    app.shutdown().await?;
    Ok(())
}
