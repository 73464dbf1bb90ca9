//! Saved-posts service with deferred notifications.

use anyhow::Result;
use scroller_storage::{SavedPostsStorage, SavedToggle};
use tokio::sync::mpsc;

/// A transient, user-visible notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Wraps the durable saved-post set. Toggles commit synchronously and the
/// notification is dispatched only after the commit completes.
pub struct SavedPostsService {
    storage: SavedPostsStorage,
    notifications: mpsc::UnboundedSender<Notification>,
}

impl SavedPostsService {
    pub fn new(storage: SavedPostsStorage) -> (Self, NotificationReceiver) {
        let (notifications, receiver) = mpsc::unbounded_channel();
        (
            Self {
                storage,
                notifications,
            },
            receiver,
        )
    }

    /// Flip membership of `id`, persist, then notify.
    pub fn toggle_saved_post(&self, id: &str) -> Result<SavedToggle> {
        let outcome = self.storage.toggle(id)?;

        let notification = match outcome {
            SavedToggle::Added => Notification {
                title: "Post Saved".to_string(),
                description: "Added to saved posts.".to_string(),
            },
            SavedToggle::Removed => Notification {
                title: "Post Unsaved".to_string(),
                description: "Removed from saved posts.".to_string(),
            },
        };
        // Receiver may be gone; the commit already happened either way.
        let _ = self.notifications.send(notification);

        Ok(outcome)
    }

    pub fn saved_ids(&self) -> Result<Vec<String>> {
        self.storage.list()
    }

    pub fn is_saved(&self, id: &str) -> Result<bool> {
        self.storage.is_saved(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::Database;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn setup() -> (SavedPostsService, NotificationReceiver, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db = Arc::new(Database::create(temp_dir.path().join("test.db")).unwrap());
        let storage = SavedPostsStorage::new(db).unwrap();
        let (service, receiver) = SavedPostsService::new(storage);
        (service, receiver, temp_dir)
    }

    #[test]
    fn toggle_notifies_after_commit() {
        let (service, mut notifications, _tmp) = setup();

        service.toggle_saved_post("p1").unwrap();
        // The state is already committed by the time the notice is read.
        assert!(service.is_saved("p1").unwrap());

        let notice = notifications.try_recv().unwrap();
        assert_eq!(notice.title, "Post Saved");

        service.toggle_saved_post("p1").unwrap();
        let notice = notifications.try_recv().unwrap();
        assert_eq!(notice.title, "Post Unsaved");
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let (service, _notifications, _tmp) = setup();
        service.toggle_saved_post("p1").unwrap();

        let before = service.saved_ids().unwrap();
        service.toggle_saved_post("p2").unwrap();
        service.toggle_saved_post("p2").unwrap();
        assert_eq!(service.saved_ids().unwrap(), before);
    }

    #[test]
    fn dropped_receiver_does_not_fail_the_toggle() {
        let (service, notifications, _tmp) = setup();
        drop(notifications);
        service.toggle_saved_post("p1").unwrap();
        assert!(service.is_saved("p1").unwrap());
    }
}
