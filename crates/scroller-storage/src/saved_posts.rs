//! Saved-post set persistence.

use std::sync::Arc;

use anyhow::Result;
use redb::{Database, ReadableDatabase, TableDefinition};

const SAVED_POSTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("saved_posts");

/// Storage key holding the JSON array of saved post ids.
pub const SAVED_POST_IDS_KEY: &str = "savedPostIds";

/// Result of a toggle: whether the id was added to or removed from the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedToggle {
    Added,
    Removed,
}

/// Durable set of bookmarked post ids. Keyed by local storage only, not by
/// user identity, so the set survives logout.
#[derive(Clone)]
pub struct SavedPostsStorage {
    db: Arc<Database>,
}

impl SavedPostsStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SAVED_POSTS_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Load the saved set. Missing or malformed stored data reads as empty.
    pub fn load(&self) -> Result<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SAVED_POSTS_TABLE)?;

        match table.get(SAVED_POST_IDS_KEY)? {
            Some(value) => match serde_json::from_slice::<Vec<String>>(value.value()) {
                Ok(ids) => Ok(ids),
                Err(e) => {
                    tracing::debug!("Discarding malformed saved-post ids: {}", e);
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Flip membership of `id` and persist the new set synchronously.
    pub fn toggle(&self, id: &str) -> Result<SavedToggle> {
        let mut ids = self.load()?;
        let outcome = if let Some(pos) = ids.iter().position(|existing| existing == id) {
            ids.remove(pos);
            SavedToggle::Removed
        } else {
            ids.push(id.to_string());
            SavedToggle::Added
        };
        self.persist(&ids)?;
        Ok(outcome)
    }

    pub fn is_saved(&self, id: &str) -> Result<bool> {
        Ok(self.load()?.iter().any(|existing| existing == id))
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.load()
    }

    fn persist(&self, ids: &[String]) -> Result<()> {
        let serialized = serde_json::to_vec(ids)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SAVED_POSTS_TABLE)?;
            table.insert(SAVED_POST_IDS_KEY, serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
