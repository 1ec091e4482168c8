//! Route guard behavior around the restore-on-navigation flow.

use crate::helpers::{TEST_TOKEN, seed_token, session_fixture, user_json};

use client_core::auth::guard::{GuardOutcome, HOME_ROUTE, LOGIN_ROUTE, before_navigate};

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_no_token_when_navigating_then_proceeds_without_remote_call() {
    let (server, session, _store_dir) = session_fixture().await;

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = before_navigate(&session, LOGIN_ROUTE, HOME_ROUTE).await;

    assert_eq!(outcome, GuardOutcome::Proceed);
}

#[tokio::test]
async fn given_token_when_navigating_to_login_then_restores_and_redirects_home() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "bob")))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = before_navigate(&session, LOGIN_ROUTE, "/somewhere").await;

    assert_eq!(outcome, GuardOutcome::Redirect(HOME_ROUTE.to_string()));
    assert!(session.is_logged_in().await);
}

#[tokio::test]
async fn given_token_when_navigating_elsewhere_then_restores_and_proceeds() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "bob")))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = before_navigate(&session, "/post/5", HOME_ROUTE).await;

    assert_eq!(outcome, GuardOutcome::Proceed);
    assert!(session.is_logged_in().await);
}

/// Navigation is never blocked on a failed restore; the visitor just stays
/// anonymous (and the bad token is gone).
#[tokio::test]
async fn given_rejected_token_when_navigating_then_still_proceeds() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, "stale-token");

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = before_navigate(&session, LOGIN_ROUTE, HOME_ROUTE).await;

    assert_eq!(outcome, GuardOutcome::Proceed);
    assert!(!session.is_logged_in().await);
    assert!(session.token_store().get().is_none());
}

#[tokio::test]
async fn given_loaded_session_when_navigating_then_no_second_restore() {
    let (server, session, _store_dir) = session_fixture().await;

    seed_token(&session, TEST_TOKEN);

    Mock::given(method("GET"))
        .and(path("/api/revert_user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "bob")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        before_navigate(&session, "/post/1", HOME_ROUTE).await,
        GuardOutcome::Proceed
    );
    // Session now loaded; the second navigation must not call out again.
    assert_eq!(
        before_navigate(&session, "/post/2", "/post/1").await,
        GuardOutcome::Proceed
    );
}
