pub mod profile;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

pub use profile::ProfileStorage;

/// Storage aggregate owning the database handle.
pub struct Storage {
    db: Arc<Database>,
    pub profiles: ProfileStorage,
}

impl Storage {
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);
        let profiles = ProfileStorage::new(db.clone())?;
        Ok(Self { db, profiles })
    }

    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
