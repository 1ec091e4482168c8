//! Test helpers for the wiremock-backed integration tests.
//!
//! Every fixture wires a [`ForumClient`] against a fresh mock server and a
//! throwaway on-disk token store, so tests exercise the real request
//! pipeline (header injection, error lowering, token persistence) without a
//! forum server.

use client_core::{AuthSession, ForumClient, TokenStore};

use serde_json::json;
use tempfile::TempDir;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";

/// A wire-shaped full user record, as login/revert return it.
pub fn user_json(id: u32, username: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": format!("{username}@example.com"),
        "username": username,
        "alias": username,
        "password": "hashed",
        "group_ids": [1],
        "status": 0,
        "user_type": 1,
        "signature": "",
        "created_at": 1700000000,
        "total_post": 0,
        "total_comment": 0
    })
}

pub fn server_info_json(auth_active_days: u32) -> serde_json::Value {
    json!({
        "editable_seconds": 600,
        "open_register": true,
        "custom_post_cover_supported": false,
        "auth_active_days": auth_active_days
    })
}

pub fn detail_error_json(code: i64, msg: &str) -> serde_json::Value {
    json!({ "code": code, "msg": msg })
}

/// Mock server plus a session over a throwaway token store.
///
/// The [`TempDir`] keeps the store directory alive; hold on to it for the
/// duration of the test.
pub async fn session_fixture() -> (MockServer, AuthSession, TempDir) {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let tokens = TokenStore::new(dir.path());
    let client =
        ForumClient::new(&format!("{}/api/", server.uri()), tokens).expect("construct client");

    (server, AuthSession::new(client), dir)
}

/// Mock server plus a bare client over a throwaway token store.
pub async fn client_fixture() -> (MockServer, ForumClient, TempDir) {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let tokens = TokenStore::new(dir.path());
    let client =
        ForumClient::new(&format!("{}/api/", server.uri()), tokens).expect("construct client");

    (server, client, dir)
}

pub fn seed_token(session: &AuthSession, token: &str) {
    session.token_store().set(token, 30).expect("seed token");
}
