use super::{DatabaseClient, DatabaseError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCall {
    Connect,
    Disconnect,
}

/// In-process database client
///
/// Keeps no data. It records each call in order and can be told to fail
/// `connect` or `disconnect` with a given error, which makes it useful for
/// local runs and for exercising lifecycle wiring.
#[derive(Debug, Default)]
pub struct MemoryClient {
    calls: Mutex<Vec<ClientCall>>,
    connected: AtomicBool,
    connect_error: Option<DatabaseError>,
    disconnect_error: Option<DatabaseError>,
    latency: Option<Duration>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `connect` fails with `error`
    pub fn fail_connect_with(mut self, error: DatabaseError) -> Self {
        self.connect_error = Some(error);
        self
    }

    /// Every `disconnect` fails with `error`
    pub fn fail_disconnect_with(mut self, error: DatabaseError) -> Self {
        self.disconnect_error = Some(error);
        self
    }

    /// Delay each call, as a network round trip would
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> Vec<ClientCall> {
        self.lock_calls().clone()
    }

    pub fn connect_calls(&self) -> usize {
        self.count(ClientCall::Connect)
    }

    pub fn disconnect_calls(&self) -> usize {
        self.count(ClientCall::Disconnect)
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn count(&self, call: ClientCall) -> usize {
        self.lock_calls().iter().filter(|c| **c == call).count()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<ClientCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn record(&self, call: ClientCall) {
        self.lock_calls().push(call);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl DatabaseClient for MemoryClient {
    async fn connect(&self) -> Result<(), DatabaseError> {
        self.record(ClientCall::Connect).await;
        if let Some(error) = &self.connect_error {
            return Err(error.clone());
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DatabaseError> {
        self.record(ClientCall::Disconnect).await;
        if let Some(error) = &self.disconnect_error {
            return Err(error.clone());
        }
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }
}
