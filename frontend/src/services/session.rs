use gloo::storage::{LocalStorage, Storage};
use shared::{SessionUser, SESSION_JWT_KEY, SESSION_USER_KEY};

/// Key-value session storage
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str);

    fn clear(&self);

    /// Logged-in user, if the stored record is present and well formed
    fn current_user(&self) -> Option<SessionUser> {
        let raw = self.get_item(SESSION_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Ignoring malformed session user: {}", e);
                None
            }
        }
    }

    /// Email of the logged-in user, empty when nobody is logged in
    fn current_email(&self) -> String {
        self.current_user().map(|user| user.email).unwrap_or_default()
    }

    fn jwt(&self) -> Option<String> {
        self.get_item(SESSION_JWT_KEY)
    }
}

/// Session backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSession;

impl SessionStorage for BrowserSession {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            log::error!("Failed to write {} to local storage", key);
        }
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}
