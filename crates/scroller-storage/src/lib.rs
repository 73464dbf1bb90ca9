//! Durable client-side storage for Code Scroller.
//!
//! The browser original kept everything in localStorage; here the same
//! key-value contract lives in an embedded redb database under the scroller
//! data directory. Two stores share the database:
//!
//! - `session` - the bearer token and serialized user of the current session
//! - `saved_posts` - the set of post ids the user has bookmarked
//!
//! Malformed persisted values are treated as absent, never surfaced as
//! errors, matching the observed behavior of the original.

pub mod paths;

mod saved_posts;
mod session;

use std::sync::Arc;

use anyhow::Result;
use redb::Database;

pub use saved_posts::{SAVED_POST_IDS_KEY, SavedPostsStorage, SavedToggle};
pub use session::{AUTH_TOKEN_KEY, AUTH_USER_KEY, SessionStorage};

/// Central storage handle owning the database and both stores.
pub struct Storage {
    db: Arc<Database>,
    pub session: SessionStorage,
    pub saved_posts: SavedPostsStorage,
}

impl Storage {
    /// Open (or create) the database at the given path and initialize all
    /// tables.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let session = SessionStorage::new(db.clone())?;
        let saved_posts = SavedPostsStorage::new(db.clone())?;

        Ok(Self {
            db,
            session,
            saved_posts,
        })
    }

    /// Open the database at the default location under the scroller data
    /// directory.
    pub fn open_default() -> Result<Self> {
        let path = paths::db_path()?;
        Self::new(&path.to_string_lossy())
    }

    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }
}
