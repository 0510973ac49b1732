pub mod memory;
pub mod models;
pub mod paths;
pub mod tone;

pub use models::*;
