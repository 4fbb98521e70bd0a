use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().get("token"), None);
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryTokenStore::with_entry("token", "old");
    store.set("token", "new");
    assert_eq!(store.get("token").as_deref(), Some("new"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryTokenStore::new();
    store.set("token", "t");
    assert_eq!(store.get("other"), None);
}

#[test]
fn reference_delegates_to_store() {
    let store = MemoryTokenStore::new();
    let by_ref = &store;
    by_ref.set("token", "t1");
    assert_eq!(store.get("token").as_deref(), Some("t1"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_natively() {
    LocalStorage.set("token", "t");
    assert_eq!(LocalStorage.get("token"), None);
}
