//! Persisted Session
//!
//! The one piece of durable client state: the current user's id. The backing
//! store sits behind a small key-value trait so page logic never touches
//! browser storage directly.

use std::rc::Rc;

/// Storage key for the signed-in user's id
pub const USER_ID_KEY: &str = "gymrec_user_id";

/// Minimal key-value storage surface. Implementations are expected to be
/// best-effort; writes that fail are dropped silently.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser local storage backend
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    fn delete(&self, key: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// Session context handed to the Profile page. Presence of a stored user id
/// is what gates the logged-in view.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session backed by browser local storage
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// The saved user id, if any
    pub fn user_id(&self) -> Option<String> {
        self.store.read(USER_ID_KEY).filter(|id| !id.is_empty())
    }

    pub fn remember_user(&self, user_id: &str) {
        self.store.write(USER_ID_KEY, user_id);
    }

    /// Drop the saved id, either on logout or when it no longer resolves
    /// on the backend.
    pub fn forget_user(&self) {
        self.store.delete(USER_ID_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn delete(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn memory_session() -> Session {
        Session::new(Rc::new(MemoryStore::default()))
    }

    #[test]
    fn test_remember_then_read_user_id() {
        let session = memory_session();
        assert_eq!(session.user_id(), None);

        session.remember_user("user-123");
        assert_eq!(session.user_id().as_deref(), Some("user-123"));
    }

    #[test]
    fn test_forget_clears_stored_id() {
        let session = memory_session();
        session.remember_user("user-123");

        session.forget_user();
        assert_eq!(session.user_id(), None);

        // Forgetting twice is harmless
        session.forget_user();
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_empty_stored_id_counts_as_logged_out() {
        let session = memory_session();
        session.remember_user("");
        assert_eq!(session.user_id(), None);
    }
}
