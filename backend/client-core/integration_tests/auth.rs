//! Session state machine tests: login, logout, and revert against a mocked
//! forum server, including the failure paths that pair session-clear with
//! token-removal.

use crate::helpers::{
    TEST_TOKEN, detail_error_json, seed_token, server_info_json, session_fixture, user_json,
};

use client_core::api::AUTHORIZATION_HEADER_KEY;

use models::user::ToLoginUser;
use models::verification::VerificationKey;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn login_credentials() -> ToLoginUser {
    ToLoginUser {
        username: "alice".into(),
        password: "pw".into(),
    }
}

#[tokio::test]
async fn given_valid_credentials_when_login_then_session_and_token_are_set() {
    let (server, session, _store_dir) = session_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/login_user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "auth": TEST_TOKEN,
            "user": user_json(3, "alice")
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/server_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_info_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    // A failed logout first, so the error-clearing on login is observable.
    assert!(!session.logout().await);
    assert!(session.last_error().await.is_some());

    let ok = session.login(login_credentials(), None).await;

    assert!(ok);
    assert!(session.is_logged_in().await);
    assert_eq!(session.current_user().await.unwrap().username, "alice");
    assert_eq!(session.last_error().await, None, "login clears prior error");
    assert_eq!(
        session.token_store().get().expect("token persisted"),
        TEST_TOKEN
    );
}

/// The login request travels as `{target, verification}`.
#[tokio::test]
async fn given_verification_proof_when_login_then_wrapper_shape_is_sent() {
    let (server, session, _store_dir) = session_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/login_user"))
        .and(body_json(json!({
            "target": { "username": "alice", "password": "pw" },
            "verification": { "verification_id": 9, "secret_key": "s3cr3t" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "auth": TEST_TOKEN,
            "user": user_json(3, "alice")
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/server_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_info_json(1)))
        .mount(&server)
        .await;

    let proof = VerificationKey {
        verification_id: 9,
        secret_key: "s3cr3t".into(),
    };

    assert!(session.login(login_credentials(), Some(proof)).await);
}

#[tokio::test]
async fn given_rejected_credentials_when_login_then_error_holds_server_detail() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, "pre-existing");

    Mock::given(method("POST"))
        .and(path("/api/login_user"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(detail_error_json(10305, "Password not match.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.login(login_credentials(), None).await;

    assert!(!ok);
    assert!(!session.is_logged_in().await);
    let error = session.last_error().await.expect("error recorded");
    assert_eq!(error.code, 10305);
    assert_eq!(error.msg, "Password not match.");
    assert_eq!(
        session.token_store().get().expect("token untouched"),
        "pre-existing",
        "failed login must not remove an existing token"
    );
}

#[tokio::test]
async fn given_shapeless_failure_when_login_then_error_is_generic_code_zero() {
    let (server, session, _store_dir) = session_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/login_user"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(!session.login(login_credentials(), None).await);

    let error = session.last_error().await.expect("error recorded");
    assert_eq!(error.code, 0);
    assert_eq!(error.msg, "upstream exploded");
}

#[tokio::test]
async fn given_no_token_when_logout_then_local_precondition_failure() {
    let (server, session, _store_dir) = session_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/logout_user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ok = session.logout().await;

    assert!(!ok);
    let error = session.last_error().await.expect("error recorded");
    assert_eq!(error.code, -1);
    assert_eq!(error.msg, "No authorization saved.");
}

#[tokio::test]
async fn given_token_when_logout_then_session_and_token_are_cleared() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/logout_user"))
        .and(query_param("auth", TEST_TOKEN))
        .and(header(AUTHORIZATION_HEADER_KEY, TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.logout().await;

    assert!(ok);
    assert!(!session.is_logged_in().await);
    assert!(session.token_store().get().is_none());
    assert_eq!(session.last_error().await, None);
}

/// Remote invalidation is best-effort notification: its failure populates
/// the error cell but never blocks the local teardown.
#[tokio::test]
async fn given_remote_failure_when_logout_then_still_clears_locally() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/logout_user"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(detail_error_json(10000, "Internal error.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.logout().await;

    assert!(ok, "logout reports the local clearing");
    assert!(!session.is_logged_in().await);
    assert!(session.token_store().get().is_none());
    assert_eq!(session.last_error().await.expect("error recorded").code, 10000);
}

#[tokio::test]
async fn given_no_token_when_revert_then_silent_noop() {
    let (server, session, _store_dir) = session_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ok = session.revert(None).await;

    assert!(!ok);
    assert!(!session.is_logged_in().await);
    assert_eq!(session.last_error().await, None, "no-token revert records no error");
}

#[tokio::test]
async fn given_valid_token_when_revert_then_session_is_restored() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .and(query_param("auth", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "bob")))
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.revert(None).await;

    assert!(ok);
    assert_eq!(session.current_user().await.unwrap().id, 5);
    assert_eq!(
        session.token_store().get().expect("token kept"),
        TEST_TOKEN
    );
}

#[tokio::test]
async fn given_unchanged_token_when_revert_twice_then_same_session_both_times() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .and(query_param("auth", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "bob")))
        .expect(2)
        .mount(&server)
        .await;

    assert!(session.revert(None).await);
    let first = session.current_user().await.unwrap();

    assert!(session.revert(None).await);
    let second = session.current_user().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_rejected_token_when_revert_then_token_and_session_cleared() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, "stale-token");

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(detail_error_json(10203, "Authorization revert failed.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.revert(None).await;

    assert!(!ok);
    assert!(!session.is_logged_in().await);
    assert!(
        session.token_store().get().is_none(),
        "a rejected token must never be retried"
    );
    assert_eq!(session.last_error().await.expect("error recorded").code, 10203);
}

/// An empty 200 is a success-shape violation: treated exactly like a
/// rejection, including the token removal.
#[tokio::test]
async fn given_empty_restore_body_when_revert_then_treated_as_failure() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.revert(None).await;

    assert!(!ok);
    assert!(!session.is_logged_in().await);
    assert!(session.token_store().get().is_none());
    assert_eq!(session.last_error().await.expect("error recorded").code, 0);
}

#[tokio::test]
async fn given_manual_token_when_revert_then_it_replaces_the_stored_one() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, "old-token");

    Mock::given(method("GET"))
        .and(path("/api/server_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_info_json(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .and(query_param("auth", "manual-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(8, "carol")))
        .expect(1)
        .mount(&server)
        .await;

    let ok = session.revert(Some("manual-token")).await;

    assert!(ok);
    assert_eq!(session.current_user().await.unwrap().username, "carol");
    assert_eq!(
        session.token_store().get().expect("token present"),
        "manual-token"
    );
}
