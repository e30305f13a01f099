//! The client-side "logged in" marker: one opaque JSON blob under a fixed
//! key. Nothing here is checked against the server.

use std::cell::RefCell;

use serde_json::Value;
use web_sys::Storage;

use crate::config::CONFIG;
use crate::error::StorageError;
use crate::parser::{is_truthy, value_text};

const NOT_AVAILABLE: &str = "N/A";

/// A single-key string store. `load_raw` tells an unreadable store apart
/// from an empty one.
pub trait SessionStore {
    fn load_raw(&self) -> Result<Option<String>, StorageError>;
    fn save_raw(&self, raw: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// `window.localStorage`, under the configured session key.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for LocalStorageStore {
    fn load_raw(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn save_raw(&self, raw: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: RefCell::new(Some(raw.to_string())),
            unavailable: false,
        }
    }

    /// A store that fails every operation, like a browser with storage
    /// disabled.
    pub fn unavailable() -> Self {
        Self {
            value: RefCell::new(None),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl SessionStore for MemoryStore {
    fn load_raw(&self) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.value.borrow().clone())
    }

    fn save_raw(&self, raw: &str) -> Result<(), StorageError> {
        self.check()?;
        *self.value.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check()?;
        self.value.borrow_mut().take();
        Ok(())
    }
}

/// The stored user record, read through the field-name fallbacks the
/// backend's various response shapes need.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    record: Value,
}

impl Session {
    pub fn new(record: Value) -> Self {
        Self { record }
    }

    /// Unparseable blobs still count as a session, just one with no fields.
    pub fn from_raw(raw: &str) -> Self {
        let record = serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("stored session is not valid JSON: {}", e);
            Value::Null
        });
        Self { record }
    }

    pub fn record(&self) -> &Value {
        &self.record
    }

    fn field(value: &Value, key: &str) -> Option<String> {
        value
            .get(key)
            .filter(|v| is_truthy(v))
            .and_then(value_text)
    }

    fn text(&self, key: &str) -> Option<String> {
        Self::field(&self.record, key)
    }

    pub fn user_id(&self) -> Option<String> {
        let nested = self.record.get("data");
        self.text("id")
            .or_else(|| self.text("user_id"))
            .or_else(|| nested.and_then(|data| Self::field(data, "id")))
            .or_else(|| nested.and_then(|data| Self::field(data, "user_id")))
    }

    pub fn display_name(&self) -> String {
        self.text("full_name")
            .or_else(|| self.text("name"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn phone(&self) -> String {
        self.text("phone_no")
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn username(&self) -> String {
        self.text("username")
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn mobile(&self) -> Option<String> {
        self.text("mobile")
    }
}

pub struct SessionManager<S: SessionStore> {
    store: S,
}

impl SessionManager<LocalStorageStore> {
    pub fn browser() -> Self {
        Self::new(LocalStorageStore::new(CONFIG.session_key.clone()))
    }
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored session, if the store can be read. An empty stored string
    /// does not count as a session.
    pub fn stored(&self) -> Result<Option<Session>, StorageError> {
        Ok(self
            .store
            .load_raw()?
            .filter(|raw| !raw.is_empty())
            .map(|raw| Session::from_raw(&raw)))
    }

    /// Like `stored`, with an unreadable store counting as logged out.
    pub fn current(&self) -> Option<Session> {
        self.stored().unwrap_or_else(|e| {
            log::debug!("session store unreadable: {}", e);
            None
        })
    }

    /// The session to hold after re-reading the store. A readable store
    /// wins; an unreadable one leaves `held` in place, so a session kept in
    /// memory after a failed write survives navigation.
    pub fn refresh(&self, held: Option<Session>) -> Option<Session> {
        match self.stored() {
            Ok(stored) => stored,
            Err(e) => {
                log::debug!("keeping in-memory session, store unreadable: {}", e);
                held
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    /// Stores the record exactly as the backend returned it.
    pub fn sign_in(&self, record: Value) -> Result<Session, StorageError> {
        let raw = serde_json::to_string(&record)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.save_raw(&raw)?;
        Ok(Session::new(record))
    }

    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_in_and_out() {
        let manager = SessionManager::new(MemoryStore::default());
        assert!(!manager.is_logged_in());

        let session = manager
            .sign_in(json!({"id": 12, "full_name": "Nisha Patel", "username": "nisha"}))
            .unwrap();
        assert_eq!(session.user_id().as_deref(), Some("12"));
        assert_eq!(manager.current(), Some(session));

        manager.sign_out().unwrap();
        assert_eq!(manager.current(), None);
    }

    #[test]
    fn test_record_is_stored_verbatim() {
        let store = MemoryStore::default();
        let manager = SessionManager::new(store);
        manager
            .sign_in(json!({"token": "abc", "extra": [1, 2]}))
            .unwrap();
        let raw = manager.store.load_raw().unwrap().unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, json!({"token": "abc", "extra": [1, 2]}));
    }

    #[test]
    fn test_user_id_fallbacks() {
        let id = |record: Value| Session::new(record).user_id();
        assert_eq!(id(json!({"id": "7", "user_id": "8"})), Some("7".to_string()));
        assert_eq!(id(json!({"user_id": 8})), Some("8".to_string()));
        assert_eq!(id(json!({"data": {"id": 9}})), Some("9".to_string()));
        assert_eq!(id(json!({"data": {"user_id": "10"}})), Some("10".to_string()));
        assert_eq!(id(json!({"id": "", "user_id": 0})), None);
        assert_eq!(id(json!({})), None);
    }

    #[test]
    fn test_display_fallbacks() {
        let session = Session::new(json!({"name": "Dev", "mobile": "99999"}));
        assert_eq!(session.display_name(), "Dev");
        assert_eq!(session.phone(), "N/A");
        assert_eq!(session.username(), "N/A");
        assert_eq!(session.mobile().as_deref(), Some("99999"));

        let session = Session::new(json!({"full_name": "Dev Sharma", "name": "Dev"}));
        assert_eq!(session.display_name(), "Dev Sharma");
        assert_eq!(session.mobile(), None);
    }

    #[test]
    fn test_garbage_blob_still_counts_as_logged_in() {
        let manager = SessionManager::new(MemoryStore::with_raw("not json"));
        let session = manager.current().unwrap();
        assert_eq!(session.record(), &Value::Null);
        assert_eq!(session.display_name(), "N/A");
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_unreadable_store_keeps_held_session() {
        let manager = SessionManager::new(MemoryStore::unavailable());
        let record = json!({"id": 5, "username": "tara"});
        assert_eq!(
            manager.sign_in(record.clone()),
            Err(StorageError::Unavailable)
        );

        let held = Some(Session::new(record));
        assert_eq!(manager.stored(), Err(StorageError::Unavailable));
        assert_eq!(manager.current(), None);
        assert_eq!(manager.refresh(held.clone()), held);
    }

    #[test]
    fn test_readable_store_replaces_held_session() {
        let held = Some(Session::new(json!({"id": 5})));

        let logged_out = SessionManager::new(MemoryStore::default());
        assert_eq!(logged_out.refresh(held.clone()), None);

        let other_tab = SessionManager::new(MemoryStore::with_raw(r#"{"id": 6}"#));
        let refreshed = other_tab.refresh(held).unwrap();
        assert_eq!(refreshed.user_id().as_deref(), Some("6"));
    }

    #[test]
    fn test_empty_blob_is_logged_out() {
        let manager = SessionManager::new(MemoryStore::with_raw(""));
        assert!(!manager.is_logged_in());
    }
}
