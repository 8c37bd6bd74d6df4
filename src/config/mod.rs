//! Environment-backed configuration for the application host

use crate::error::{DbLinkError, Result};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const INIT_TIMEOUT_MS: &str = "LIFECYCLE_INIT_TIMEOUT_MS";
pub const DESTROY_TIMEOUT_MS: &str = "LIFECYCLE_DESTROY_TIMEOUT_MS";

/// Configuration service
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Snapshot of the process environment
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Read a millisecond count as a `Duration`. Blank values count as unset.
    pub fn get_duration_ms(&self, key: &str) -> Result<Option<Duration>> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|e| DbLinkError::invalid_config(key, format!("{raw:?}: {e}")))
    }
}

/// Phase timeouts for the lifecycle host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub init_timeout: Option<Duration>,
    pub destroy_timeout: Option<Duration>,
}

impl LifecycleConfig {
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        Ok(Self {
            init_timeout: config.get_duration_ms(INIT_TIMEOUT_MS)?,
            destroy_timeout: config.get_duration_ms(DESTROY_TIMEOUT_MS)?,
        })
    }
}

/// Where the database client connects to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        match config.get(DATABASE_URL) {
            Some(url) if !url.trim().is_empty() => Ok(Self { url }),
            _ => Err(DbLinkError::invalid_config(DATABASE_URL, "not set")),
        }
    }
}
