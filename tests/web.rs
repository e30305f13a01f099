#![cfg(target_arch = "wasm32")]

use serde_json::json;
use travchap_web::config::CONFIG;
use travchap_web::session::{LocalStorageStore, SessionManager, SessionStore};
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
}

#[test]
fn local_store_round_trip() {
    let store = LocalStorageStore::new("travchap_test_round_trip");
    store.clear().unwrap();
    assert_eq!(store.load_raw(), Ok(None));

    store.save_raw("{\"id\":3}").unwrap();
    assert_eq!(
        local_storage()
            .get_item("travchap_test_round_trip")
            .unwrap()
            .as_deref(),
        Some("{\"id\":3}")
    );

    store.clear().unwrap();
    assert_eq!(store.load_raw(), Ok(None));
}

#[test]
fn session_survives_a_new_manager() {
    let key = "travchap_test_session";
    SessionManager::new(LocalStorageStore::new(key))
        .sign_in(json!({"user_id": 44, "full_name": "Ravi Kumar"}))
        .unwrap();

    let manager = SessionManager::new(LocalStorageStore::new(key));
    let session = manager.current().unwrap();
    assert_eq!(session.user_id().as_deref(), Some("44"));
    assert_eq!(session.display_name(), "Ravi Kumar");

    manager.sign_out().unwrap();
    assert!(!manager.is_logged_in());
}

#[test]
fn browser_manager_uses_configured_key() {
    let storage = local_storage();
    storage.set_item(&CONFIG.session_key, "{\"username\":\"meera\"}").unwrap();

    let session = SessionManager::browser().current().unwrap();
    assert_eq!(session.username(), "meera");

    SessionManager::browser().sign_out().unwrap();
    assert_eq!(storage.get_item(&CONFIG.session_key).unwrap(), None);
}

#[test]
fn blank_stored_value_is_logged_out() {
    let key = "travchap_test_blank";
    local_storage().set_item(key, "").unwrap();
    assert!(!SessionManager::new(LocalStorageStore::new(key)).is_logged_in());
    local_storage().remove_item(key).unwrap();
}
