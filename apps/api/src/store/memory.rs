use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::models::resume::ResumeRow;
use crate::store::{ResumeStore, StoreError};

/// Process-local store. Writes to one id are serialized by the lock.
#[derive(Default)]
pub struct MemoryResumeStore {
    docs: RwLock<HashMap<String, ResumeRow>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn find(&self, id: &str) -> Result<Option<ResumeRow>, StoreError> {
        Ok(self.docs.read().await.get(id).cloned())
    }

    async fn upsert(
        &self,
        id: &str,
        data: Value,
        updated_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, StoreError> {
        let mut docs = self.docs.write().await;
        let updated_at = match docs.get(id) {
            Some(existing) => existing.updated_at.max(updated_at),
            None => updated_at,
        };
        docs.insert(
            id.to_string(),
            ResumeRow {
                id: id.to_string(),
                data,
                updated_at,
            },
        );
        Ok(updated_at)
    }

    async fn ping(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
