//! Session service: durable session store plus process-wide reactive state.

use anyhow::Result;
use parking_lot::RwLock;
use scroller_models::User;
use scroller_storage::SessionStorage;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Snapshot of the current session as seen by the view layer.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Holds the authoritative in-memory session state, persists every mutation
/// and broadcasts a fresh snapshot to subscribers immediately, with no
/// debouncing.
pub struct SessionService {
    storage: SessionStorage,
    state: RwLock<SessionState>,
    events: broadcast::Sender<SessionState>,
}

impl SessionService {
    /// Load the persisted session eagerly. A stored pair missing either half
    /// leaves the service anonymous.
    pub fn new(storage: SessionStorage) -> Result<Self> {
        let token = storage.token()?;
        let user = storage.user()?;

        let state = match (token, user) {
            (Some(token), Some(user)) => SessionState {
                token: Some(token),
                user: Some(user),
            },
            _ => SessionState::default(),
        };

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            storage,
            state: RwLock::new(state),
            events,
        })
    }

    /// Commit a login response. This is purely a state-commit step: the
    /// network call happened in the API client. A response missing either
    /// the token or the user leaves the session unchanged.
    pub fn login(&self, token: Option<String>, user: Option<User>) -> Result<()> {
        let (Some(token), Some(user)) = (token, user) else {
            tracing::debug!("Ignoring partial login response");
            return Ok(());
        };

        self.storage.save_session(&token, &user)?;
        *self.state.write() = SessionState {
            token: Some(token),
            user: Some(user),
        };
        self.publish();
        Ok(())
    }

    /// Persist an updated user against the existing token and republish.
    /// Fails when no session is active.
    pub fn update_user(&self, user: User) -> Result<()> {
        let token = self
            .current()
            .token
            .ok_or_else(|| anyhow::anyhow!("Cannot update user without an active session"))?;

        self.storage.save_session(&token, &user)?;
        self.state.write().user = Some(user);
        self.publish();
        Ok(())
    }

    /// Clear the stored session and publish the anonymous state.
    pub fn logout(&self) -> Result<()> {
        self.storage.clear_session()?;
        *self.state.write() = SessionState::default();
        self.publish();
        Ok(())
    }

    /// Current session snapshot.
    pub fn current(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin()
    }

    /// Subscribe to session snapshots published on every mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionState> {
        self.events.subscribe()
    }

    fn publish(&self) {
        // Send fails only when nobody is subscribed, which is fine.
        let _ = self.events.send(self.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::Database;
    use scroller_models::Role;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn setup() -> (SessionService, SessionStorage, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db = Arc::new(Database::create(temp_dir.path().join("test.db")).unwrap());
        let storage = SessionStorage::new(db).unwrap();
        let service = SessionService::new(storage.clone()).unwrap();
        (service, storage, temp_dir)
    }

    fn sample_user() -> User {
        User {
            id: Some(1),
            email: Some("ada@example.com".to_string()),
            display_name: Some("Ada".to_string()),
            photo_url: None,
            role: Some(Role::User),
        }
    }

    #[test]
    fn login_commits_and_publishes() {
        let (service, storage, _tmp) = setup();
        let mut events = service.subscribe();

        service
            .login(Some("tok-1".to_string()), Some(sample_user()))
            .unwrap();

        assert!(service.is_authenticated());
        assert_eq!(storage.token().unwrap().as_deref(), Some("tok-1"));

        let snapshot = events.try_recv().unwrap();
        assert!(snapshot.is_authenticated());
    }

    #[test]
    fn partial_login_leaves_session_unchanged() {
        let (service, storage, _tmp) = setup();

        service.login(Some("tok-1".to_string()), None).unwrap();
        service.login(None, Some(sample_user())).unwrap();

        assert!(!service.is_authenticated());
        assert!(storage.token().unwrap().is_none());
        assert!(storage.user().unwrap().is_none());
    }

    #[test]
    fn logout_clears_store_and_state() {
        let (service, storage, _tmp) = setup();
        service
            .login(Some("tok-1".to_string()), Some(sample_user()))
            .unwrap();

        service.logout().unwrap();

        assert!(!service.is_authenticated());
        assert!(storage.token().unwrap().is_none());
        assert!(storage.user().unwrap().is_none());
    }

    #[test]
    fn update_user_requires_active_session() {
        let (service, _storage, _tmp) = setup();
        assert!(service.update_user(sample_user()).is_err());
    }

    #[test]
    fn update_user_keeps_existing_token() {
        let (service, storage, _tmp) = setup();
        service
            .login(Some("tok-1".to_string()), Some(sample_user()))
            .unwrap();

        let mut updated = sample_user();
        updated.display_name = Some("Ada L.".to_string());
        service.update_user(updated).unwrap();

        assert_eq!(storage.token().unwrap().as_deref(), Some("tok-1"));
        assert_eq!(
            storage.user().unwrap().unwrap().display_name.as_deref(),
            Some("Ada L.")
        );
    }

    #[test]
    fn eager_load_restores_persisted_session() {
        let (service, storage, _tmp) = setup();
        service
            .login(Some("tok-1".to_string()), Some(sample_user()))
            .unwrap();
        drop(service);

        let reloaded = SessionService::new(storage).unwrap();
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.current().token.as_deref(), Some("tok-1"));
    }

    #[test]
    fn admin_flag_follows_user_invariant() {
        let (service, _storage, _tmp) = setup();
        let mut admin = sample_user();
        admin.role = Some(Role::Admin);
        service
            .login(Some("tok-1".to_string()), Some(admin))
            .unwrap();
        assert!(service.is_admin());
    }
}
