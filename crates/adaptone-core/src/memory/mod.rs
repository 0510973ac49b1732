//! Short-term conversation memory.
//!
//! - `SessionMemory`: bounded FIFO of recent exchanges for one user
//! - `SessionStore`: in-process map from user id to their buffer, created
//!   lazily and handed to request handlers as an explicit dependency

mod session;
mod store;

pub use session::{SHORT_TERM_CAPACITY, SessionMemory};
pub use store::SessionStore;
