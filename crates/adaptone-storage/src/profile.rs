//! Profile persistence: one redb table keyed by user id, each value the full
//! profile serialized as a JSON blob. The store is the sole writer; callers
//! always work on copies.

use adaptone_core::models::UserProfile;
use anyhow::Result;
use chrono::Utc;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

const PROFILE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("profiles");

pub struct ProfileStorage {
    db: Arc<Database>,
}

impl ProfileStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        // Create table
        let write_txn = db.begin_write()?;
        write_txn.open_table(PROFILE_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Insert a brand-new profile. Fails if the user id is already taken.
    /// Stamps `last_interaction` with the creation time.
    pub fn create(&self, profile: &mut UserProfile) -> Result<()> {
        profile.interaction_history.last_interaction = Some(Utc::now().to_rfc3339());

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PROFILE_TABLE)?;
            if table.get(profile.user_id.as_str())?.is_some() {
                anyhow::bail!("profile already exists for user {}", profile.user_id);
            }
            let json_bytes = serde_json::to_vec(&*profile)?;
            table.insert(profile.user_id.as_str(), json_bytes.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!(user_id = %profile.user_id, "profile created");
        Ok(())
    }

    pub fn get(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROFILE_TABLE)?;

        if let Some(value) = table.get(user_id)? {
            let profile: UserProfile = serde_json::from_slice(value.value())?;
            Ok(Some(profile))
        } else {
            Ok(None)
        }
    }

    /// Replace an existing profile. Fails if the user id is unknown.
    /// Bumps `total_interactions` and refreshes `last_interaction`; the
    /// caller's copy sees both changes.
    pub fn update(&self, profile: &mut UserProfile) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PROFILE_TABLE)?;
            if table.get(profile.user_id.as_str())?.is_none() {
                anyhow::bail!("no profile stored for user {}", profile.user_id);
            }

            profile.interaction_history.total_interactions += 1;
            profile.interaction_history.last_interaction = Some(Utc::now().to_rfc3339());

            let json_bytes = serde_json::to_vec(&*profile)?;
            table.insert(profile.user_id.as_str(), json_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn exists(&self, user_id: &str) -> Result<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROFILE_TABLE)?;
        Ok(table.get(user_id)?.is_some())
    }
}
