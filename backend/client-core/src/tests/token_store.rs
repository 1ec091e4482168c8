// Unit tests for the file-backed token store: opaque get/set/remove plus
// the expiry and corruption edge cases.

use crate::auth::token_store::{AUTH_TOKEN_NAME, TokenStore};

use std::fs;

use tempfile::TempDir;

fn store_fixture() -> (TokenStore, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    (TokenStore::new(dir.path()), dir)
}

#[test]
fn given_empty_store_when_get_then_reports_absent() {
    let (store, _dir) = store_fixture();

    assert!(store.get().is_none());
}

#[test]
fn given_stored_token_when_get_then_round_trips_opaque_value() {
    let (store, _dir) = store_fixture();

    store.set("an-opaque-token", 7).expect("persist token");

    let token = store.get().expect("token present");
    assert_eq!(token, "an-opaque-token");
}

#[test]
fn given_two_sets_when_get_then_latest_value_wins() {
    let (store, _dir) = store_fixture();

    store.set("first", 7).expect("persist token");
    store.set("second", 7).expect("persist token");

    assert_eq!(store.get().expect("token present"), "second");
}

#[test]
fn given_removed_token_when_get_then_reports_absent() {
    let (store, _dir) = store_fixture();

    store.set("an-opaque-token", 7).expect("persist token");
    store.remove();

    assert!(store.get().is_none());
    // Removing again must stay silent.
    store.remove();
}

/// **VALUE**: A zero-day expiry dates the record in the past, so this pins
/// the "expired records read as absent and are deleted" contract without
/// sleeping in the test.
#[test]
fn given_expired_record_when_get_then_absent_and_deleted() {
    let (store, dir) = store_fixture();

    store.set("short-lived", 0).expect("persist token");

    assert!(store.get().is_none());
    assert!(
        !dir.path().join(AUTH_TOKEN_NAME).exists(),
        "expired record should be deleted on read"
    );
}

#[test]
fn given_undecodable_record_when_get_then_absent_and_deleted() {
    let (store, dir) = store_fixture();
    let path = dir.path().join(AUTH_TOKEN_NAME);

    fs::write(&path, "not json at all").expect("write garbage");

    assert!(store.get().is_none());
    assert!(!path.exists(), "bad record should be deleted on read");
}

#[test]
fn given_clone_when_set_through_one_then_visible_through_other() {
    let (store, _dir) = store_fixture();
    let clone = store.clone();

    store.set("shared", 7).expect("persist token");

    assert_eq!(clone.get().expect("token present"), "shared");
}
