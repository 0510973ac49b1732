use adaptone_core::memory::SessionStore;
use adaptone_storage::Storage;
use std::sync::Arc;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(storage: Arc<Storage>, sessions: Arc<SessionStore>) -> Self {
        Self { storage, sessions }
    }
}
