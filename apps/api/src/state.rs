use std::sync::Arc;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; its connection is shared by every request.
    pub store: Arc<dyn ResumeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ResumeStore>) -> Self {
        Self { store }
    }
}
