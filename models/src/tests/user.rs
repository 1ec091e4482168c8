// Wire-shape tests for the user models. The server encodes enums as
// integers; a silent switch to serde's default string tagging would break
// every request, so the exact integer values are pinned here.

use crate::user::{
    AuthAndUser, GetUsersQuery, GetUsersSort, ToLoginUser, UserInfo, UserStatus, UserType,
};
use crate::verification::{VerificationKey, VerificationTargetWrapper};

use serde_json::json;

fn sample_user_json() -> serde_json::Value {
    json!({
        "id": 3,
        "email": "alice@example.com",
        "username": "alice",
        "alias": "Alice",
        "password": "hashed",
        "group_ids": [1, 2],
        "status": 0,
        "user_type": 1,
        "signature": "hi",
        "created_at": 1700000000,
        "total_post": 5,
        "total_comment": 9
    })
}

#[test]
fn given_enum_values_when_serialized_then_produces_wire_integers() {
    assert_eq!(serde_json::to_string(&UserStatus::Active).unwrap(), "0");
    assert_eq!(serde_json::to_string(&UserStatus::Observer).unwrap(), "3");
    assert_eq!(serde_json::to_string(&UserType::Guest).unwrap(), "0");
    assert_eq!(
        serde_json::to_string(&UserType::Administrator).unwrap(),
        "2"
    );
    assert_eq!(serde_json::to_string(&GetUsersSort::UserType).unwrap(), "3");
}

#[test]
fn given_login_response_when_deserialized_then_yields_token_and_user() {
    let body = json!({ "auth": "opaque-token", "user": sample_user_json() });

    let anu: AuthAndUser = serde_json::from_value(body).unwrap();

    assert_eq!(anu.auth, "opaque-token");
    assert_eq!(anu.user.id, 3);
    assert_eq!(anu.user.user_type, UserType::General);
    assert_eq!(anu.user.avatar_url, None, "absent avatar_url is None");
}

#[test]
fn given_user_without_avatar_when_serialized_then_omits_field() {
    let user: UserInfo = serde_json::from_value(sample_user_json()).unwrap();

    let out = serde_json::to_value(&user).unwrap();

    assert!(out.get("avatar_url").is_none());
}

/// The issue-session request travels as `{target, verification?}`.
#[test]
fn given_login_wrapper_when_serialized_then_matches_wire_shape() {
    let wrapper = VerificationTargetWrapper {
        target: ToLoginUser {
            username: "alice".into(),
            password: "pw".into(),
        },
        verification: Some(VerificationKey {
            verification_id: 7,
            secret_key: "k".into(),
        }),
    };

    let out = serde_json::to_value(&wrapper).unwrap();

    assert_eq!(out["target"]["username"], "alice");
    assert_eq!(out["verification"]["verification_id"], 7);

    let without_proof = VerificationTargetWrapper {
        target: ToLoginUser {
            username: "alice".into(),
            password: "pw".into(),
        },
        verification: None,
    };
    let out = serde_json::to_value(&without_proof).unwrap();
    assert!(out.get("verification").is_none());
}

#[test]
fn given_users_query_when_serialized_then_sort_is_integer() {
    let query = GetUsersQuery {
        index: 0,
        limit: 20,
        sort: GetUsersSort::Username,
        desc: true,
        extended: false,
    };

    let out = serde_json::to_value(&query).unwrap();

    assert_eq!(out["sort"], 1);
    assert_eq!(out["desc"], true);
}
