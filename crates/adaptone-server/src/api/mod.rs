pub mod chat;
pub mod error;
pub mod memory;
pub mod profile;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
