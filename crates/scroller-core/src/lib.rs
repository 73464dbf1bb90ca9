//! Application services for Code Scroller.
//!
//! The browser original kept session and bookmark state in React context
//! and hooks; here the same contracts are explicit service objects over the
//! storage layer, aggregated in [`AppCore`] and injected into the view
//! layer.

pub mod moderation;

mod saved;
mod session;
mod votes;

pub use saved::{Notification, NotificationReceiver, SavedPostsService};
pub use session::{SessionService, SessionState};
pub use votes::VoteRegistry;

use std::sync::Arc;

use anyhow::Result;
use scroller_storage::Storage;

/// Core application state shared by every command.
pub struct AppCore {
    pub storage: Arc<Storage>,
    pub session: Arc<SessionService>,
    pub saved_posts: Arc<SavedPostsService>,
    pub votes: Arc<VoteRegistry>,
}

impl AppCore {
    /// Wire up storage and services. Also returns the notification stream
    /// fed by deferred user-visible notifications.
    pub fn new(db_path: &str) -> Result<(Self, NotificationReceiver)> {
        let storage = Arc::new(Storage::new(db_path)?);

        let session = Arc::new(SessionService::new(storage.session.clone())?);
        let (saved_posts, notifications) =
            SavedPostsService::new(storage.saved_posts.clone());

        Ok((
            Self {
                storage,
                session,
                saved_posts: Arc::new(saved_posts),
                votes: Arc::new(VoteRegistry::new()),
            },
            notifications,
        ))
    }
}
