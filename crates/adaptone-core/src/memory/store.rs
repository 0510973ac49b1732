//! In-process cache of per-user session buffers.
//!
//! Buffers live for the process lifetime and are never persisted; a restart
//! starts everyone with an empty conversation. DashMap's per-key guards make
//! each append atomic for its user, so concurrent chats for the same id
//! cannot interleave a single exchange.

use dashmap::DashMap;

use super::SessionMemory;
use crate::models::Exchange;

/// Map from user id to their short-term buffer, created lazily on first use.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionMemory>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a buffer exists for the user without touching its contents.
    pub fn touch(&self, user_id: &str) {
        self.sessions.entry(user_id.to_string()).or_default();
    }

    /// Append one exchange to the user's buffer, creating it if needed.
    pub fn append(&self, user_id: &str, exchange: Exchange) {
        self.sessions
            .entry(user_id.to_string())
            .or_default()
            .push(exchange);
    }

    /// Ordered contents of the user's buffer, or None when no buffer was
    /// ever created for this user.
    pub fn snapshot(&self, user_id: &str) -> Option<Vec<Exchange>> {
        self.sessions.get(user_id).map(|memory| memory.snapshot())
    }

    /// Empty the user's buffer. No-op when the user has none.
    pub fn clear(&self, user_id: &str) {
        if let Some(mut memory) = self.sessions.get_mut(user_id) {
            memory.clear();
        }
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.sessions.contains_key(user_id)
    }
}
