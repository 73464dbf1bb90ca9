//! Session persistence: bearer token + serialized user.

use std::sync::Arc;

use anyhow::Result;
use redb::{Database, ReadableDatabase, TableDefinition};
use scroller_models::User;

const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

/// Storage key for the opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the JSON-serialized user.
pub const AUTH_USER_KEY: &str = "auth_user";

/// Durable session store. Holds at most one (token, user) pair; saving
/// overwrites unconditionally, there are no merge semantics.
#[derive(Clone)]
pub struct SessionStorage {
    db: Arc<Database>,
}

impl SessionStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SESSION_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Persist token and user, replacing any existing session.
    pub fn save_session(&self, token: &str, user: &User) -> Result<()> {
        let serialized = serde_json::to_vec(user)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(AUTH_TOKEN_KEY, token.as_bytes())?;
            table.insert(AUTH_USER_KEY, serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Current bearer token, if a session is stored.
    pub fn token(&self) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(AUTH_TOKEN_KEY)? {
            Some(value) => Ok(String::from_utf8(value.value().to_vec()).ok()),
            None => Ok(None),
        }
    }

    /// Current user. A stored value that fails to deserialize is treated as
    /// absent, not as an error.
    pub fn user(&self) -> Result<Option<User>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(AUTH_USER_KEY)? {
            Some(value) => match serde_json::from_slice::<User>(value.value()) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    tracing::debug!("Discarding malformed stored user: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Remove both session entries.
    pub fn clear_session(&self) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(AUTH_TOKEN_KEY)?;
            table.remove(AUTH_USER_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
