//! Resume storage — the single seam between route handlers and the backing store.
//!
//! `AppState` carries an `Arc<dyn ResumeStore>`, chosen once at startup:
//! `PgResumeStore` in production, `MemoryResumeStore` for tests and local runs,
//! `UnconfiguredStore` when no connection string was supplied.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{Config, StorageBackend};
use crate::db::create_lazy_pool;
use crate::models::resume::ResumeRow;

pub mod memory;
pub mod postgres;

pub use memory::MemoryResumeStore;
pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Could not encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Returns the document for `id`, or `None` if it was never written.
    async fn find(&self, id: &str) -> Result<Option<ResumeRow>, StoreError>;

    /// Creates or fully replaces the document for `id`.
    ///
    /// Returns the timestamp actually stored, which never moves backwards
    /// for a given `id` even if `updated_at` does.
    async fn upsert(
        &self,
        id: &str,
        data: Value,
        updated_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, StoreError>;

    /// Round-trips to the backing store. `Ok(false)` means it answered oddly.
    async fn ping(&self) -> Result<bool, StoreError>;
}

/// Current server time at millisecond precision, the resolution clients see.
pub fn stamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Stands in for the real store when startup could not configure one.
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl ResumeStore for UnconfiguredStore {
    async fn find(&self, _id: &str) -> Result<Option<ResumeRow>, StoreError> {
        Err(self.unavailable())
    }

    async fn upsert(
        &self,
        _id: &str,
        _data: Value,
        _updated_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, StoreError> {
        Err(self.unavailable())
    }

    async fn ping(&self) -> Result<bool, StoreError> {
        Err(self.unavailable())
    }
}

/// Picks the store implementation for this process.
///
/// Never fails: configuration problems are logged and leave the service
/// running with an `UnconfiguredStore`, so `/api/health` keeps answering.
pub fn from_config(config: &Config) -> Arc<dyn ResumeStore> {
    match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory resume store; documents are lost on exit");
            Arc::new(MemoryResumeStore::new())
        }
        StorageBackend::Postgres => {
            let Some(url) = config.database_url.as_deref() else {
                error!("Missing DATABASE_URL environment variable; storage routes will fail");
                return Arc::new(UnconfiguredStore::new("DATABASE_URL is not set"));
            };
            match create_lazy_pool(url, config.connect_timeout) {
                Ok(pool) => Arc::new(PgResumeStore::new(pool, &config.db_namespace)),
                Err(e) => {
                    error!("Invalid DATABASE_URL: {e}");
                    Arc::new(UnconfiguredStore::new(format!("invalid DATABASE_URL: {e}")))
                }
            }
        }
    }
}
