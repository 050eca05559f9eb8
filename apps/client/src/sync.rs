//! Client sync layer: reconciles the profile's user id, the remote resume
//! document, and the locally cached working copy.
//!
//! Load order is remote → local cache → nothing. Every edit is mirrored to the
//! local cache before any network call, so the cache is never staler than the
//! last confirmed remote write. Remote failures are logged and reported, never
//! fatal, and never roll back the working state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::ResumeApi;
use crate::local_store::LocalStore;
use crate::user_id::get_or_create_user_id;

/// Local store key holding the last working resume value as JSON.
pub const RESUME_CACHE_KEY: &str = "currentResumeData";

/// Where the working resume came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    LocalCache,
    /// Nothing to adopt; the user starts from the entry view.
    Empty,
}

/// What the remote lookup said, kept separate from which source was adopted
/// so callers can tell "no data yet" from "server unreachable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    Found,
    NotFound,
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub source: LoadSource,
    pub remote: RemoteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { updated_at: DateTime<Utc> },
    /// Kept locally; the remote write failed and is not retried.
    LocalOnly { error: String },
    NothingToSave,
}

pub struct ResumeSync {
    api: Arc<dyn ResumeApi>,
    store: Arc<dyn LocalStore>,
    user_id: String,
    resume: Option<Value>,
    last_synced_at: Option<DateTime<Utc>>,
}

impl ResumeSync {
    /// Resolves the user id and loads the working resume.
    pub async fn init(api: Arc<dyn ResumeApi>, store: Arc<dyn LocalStore>) -> (Self, LoadOutcome) {
        let user_id = get_or_create_user_id(store.as_ref());
        let mut sync = Self {
            api,
            store,
            user_id,
            resume: None,
            last_synced_at: None,
        };
        let outcome = sync.load().await;
        (sync, outcome)
    }

    async fn load(&mut self) -> LoadOutcome {
        let (remote_doc, remote) = self.load_remote().await;

        let adopted = remote_doc
            .map(|(data, updated_at)| {
                self.last_synced_at = updated_at;
                (data, LoadSource::Remote)
            })
            .or_else(|| self.load_local().map(|data| (data, LoadSource::LocalCache)));

        let source = match adopted {
            Some((data, source)) => {
                self.resume = Some(data);
                source
            }
            None => LoadSource::Empty,
        };

        info!(
            "Resume for {} loaded from {:?} (remote: {:?})",
            self.user_id, source, remote
        );
        LoadOutcome { source, remote }
    }

    async fn load_remote(&self) -> (Option<(Value, Option<DateTime<Utc>>)>, RemoteStatus) {
        match self.api.fetch_resume(&self.user_id).await {
            Ok(doc) if !doc.data.is_null() => {
                (Some((doc.data, doc.updated_at)), RemoteStatus::Found)
            }
            Ok(_) => (None, RemoteStatus::NotFound),
            Err(e) if e.is_not_found() => (None, RemoteStatus::NotFound),
            Err(e) => {
                warn!("Remote resume load failed, falling back to local cache: {e}");
                (None, RemoteStatus::Unreachable(e.to_string()))
            }
        }
    }

    fn load_local(&self) -> Option<Value> {
        let raw = match self.store.get(RESUME_CACHE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read cached resume: {e}");
                return None;
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Null) => None,
            Ok(data) => Some(data),
            Err(e) => {
                warn!("Ignoring unparseable cached resume: {e}");
                None
            }
        }
    }

    /// Replaces the working resume and mirrors it to the local cache.
    /// Does not touch the network.
    pub fn set_resume(&mut self, data: Value) {
        match serde_json::to_string(&data) {
            Ok(raw) => {
                if let Err(e) = self.store.set(RESUME_CACHE_KEY, &raw) {
                    warn!("Could not cache resume locally: {e}");
                }
            }
            Err(e) => warn!("Could not serialize resume for local cache: {e}"),
        }
        self.resume = Some(data);
    }

    /// Pushes the current working resume to the server once.
    pub async fn push(&mut self) -> SaveOutcome {
        let Some(data) = self.resume.as_ref() else {
            return SaveOutcome::NothingToSave;
        };

        match self.api.save_resume(&self.user_id, data).await {
            Ok(saved) => {
                debug!("Saved resume for {} at {}", self.user_id, saved.updated_at);
                self.last_synced_at = Some(saved.updated_at);
                SaveOutcome::Saved {
                    updated_at: saved.updated_at,
                }
            }
            Err(e) => {
                warn!("Remote save failed; edit kept locally: {e}");
                SaveOutcome::LocalOnly {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Applies an edit: cache locally first, then save remotely.
    pub async fn edit(&mut self, data: Value) -> SaveOutcome {
        self.set_resume(data);
        self.push().await
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn resume(&self) -> Option<&Value> {
        self.resume.as_ref()
    }

    /// Server timestamp of the last document known to be stored remotely.
    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }
}
