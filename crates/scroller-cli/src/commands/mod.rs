//! Command implementations.

pub mod admin;
pub mod assist;
pub mod auth;
pub mod posts;
pub mod profile;
pub mod saved;

use scroller_api::ApiClient;
use scroller_core::{AppCore, NotificationReceiver};

/// Everything a command needs: services, the REST client and the deferred
/// notification stream.
pub struct Ctx {
    pub core: AppCore,
    pub api: ApiClient,
    pub notifications: NotificationReceiver,
}

impl Ctx {
    /// Print any notifications dispatched since the last drain.
    pub fn drain_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            crate::output::notify(&notification);
        }
    }
}
