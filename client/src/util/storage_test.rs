use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    store.set_item("token", "abc");
    assert_eq!(store.get_item("token"), Some("abc".to_owned()));
    assert_eq!(store.get_item("email"), None);
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::new();
    store.set_item("token", "abc");
    store.remove_item("token");
    store.remove_item("token");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let reloaded = store.clone();
    store.set_item("email", "user@example.com");
    assert_eq!(reloaded.get_item("email"), Some("user@example.com".to_owned()));
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn local_storage_is_inert_outside_the_browser() {
    let store = LocalStorage;
    store.set_item("token", "abc");
    assert_eq!(store.get_item("token"), None);
    store.remove_item("token");
}
