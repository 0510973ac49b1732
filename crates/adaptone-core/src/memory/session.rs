//! Sliding window over one user's recent conversation.
//!
//! Stores exchanges in a bounded buffer that evicts the oldest entry when the
//! limit is reached. Pure FIFO: no entry is pinned, no summarization happens
//! on eviction.

use std::collections::VecDeque;

use crate::models::Exchange;

/// Maximum number of exchanges retained per user.
pub const SHORT_TERM_CAPACITY: usize = 20;

/// Bounded recent-conversation buffer for a single user.
#[derive(Debug, Clone)]
pub struct SessionMemory {
    /// Exchanges in order (oldest first)
    exchanges: VecDeque<Exchange>,
    capacity: usize,
}

impl Default for SessionMemory {
    fn default() -> Self {
        Self::new(SHORT_TERM_CAPACITY)
    }
}

impl SessionMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            exchanges: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an exchange, evicting the oldest entry when at capacity.
    pub fn push(&mut self, exchange: Exchange) {
        while self.exchanges.len() >= self.capacity {
            self.exchanges.pop_front();
        }
        self.exchanges.push_back(exchange);
    }

    /// Current contents, oldest to newest. Does not mutate the buffer.
    pub fn snapshot(&self) -> Vec<Exchange> {
        self.exchanges.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.exchanges.clear();
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_memory() {
        let memory = SessionMemory::default();
        assert_eq!(memory.capacity(), SHORT_TERM_CAPACITY);
        assert_eq!(memory.len(), 0);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_push_and_snapshot_order() {
        let mut memory = SessionMemory::default();
        memory.push(Exchange::user("Hello"));
        memory.push(Exchange::assistant("Hi there!"));

        let snapshot = memory.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], Exchange::user("Hello"));
        assert_eq!(snapshot[1], Exchange::assistant("Hi there!"));
        // Snapshot must not drain the buffer.
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let mut memory = SessionMemory::default();
        for i in 0..SHORT_TERM_CAPACITY {
            memory.push(Exchange::user(format!("message {i}")));
        }
        assert_eq!(memory.len(), SHORT_TERM_CAPACITY);

        // The 21st append evicts the 1st entry only.
        memory.push(Exchange::user("message 20"));
        assert_eq!(memory.len(), SHORT_TERM_CAPACITY);

        let snapshot = memory.snapshot();
        assert_eq!(snapshot[0].message, "message 1");
        assert_eq!(snapshot.last().unwrap().message, "message 20");
    }

    #[test]
    fn test_clear() {
        let mut memory = SessionMemory::default();
        memory.push(Exchange::user("Hello"));
        memory.clear();
        assert!(memory.is_empty());
        assert!(memory.snapshot().is_empty());
    }
}
