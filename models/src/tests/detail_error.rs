use crate::detail_error::{ApiDetailError, DetailErrorCode};

/// Code blocks are spaced at fixed offsets; drift here would desynchronize
/// the client from the server's error table.
#[test]
fn given_error_code_table_when_cast_then_block_offsets_hold() {
    assert_eq!(DetailErrorCode::InternalError as u16, 10000);
    assert_eq!(DetailErrorCode::FetchLimit as u16, 10004);
    assert_eq!(DetailErrorCode::GetVerificationError as u16, 10100);
    assert_eq!(DetailErrorCode::LoginRequired as u16, 10200);
    assert_eq!(DetailErrorCode::AuthorizationRevertFailed as u16, 10203);
    assert_eq!(DetailErrorCode::PasswordNotMatch as u16, 10305);
    assert_eq!(DetailErrorCode::PostNotFound as u16, 10400);
    assert_eq!(DetailErrorCode::PostArchived as u16, 11003);
}

#[test]
fn given_structured_payload_when_lowered_then_code_and_msg_survive() {
    let detail = ApiDetailError::from_payload(r#"{"code":10305,"msg":"Password not match."}"#);

    assert_eq!(detail.code, 10305);
    assert_eq!(detail.msg, "Password not match.");
    assert!(detail.is(DetailErrorCode::PasswordNotMatch));
    assert!(!detail.is(DetailErrorCode::UserNotFound));
}

#[test]
fn given_shapeless_payload_when_lowered_then_generic_code_zero() {
    let detail = ApiDetailError::from_payload("upstream proxy exploded");

    assert_eq!(detail.code, 0);
    assert_eq!(detail.msg, "upstream proxy exploded");
}

#[test]
fn given_partial_json_payload_when_lowered_then_falls_back_to_raw() {
    // msg missing: not a valid {code, msg} body
    let detail = ApiDetailError::from_payload(r#"{"code":10305}"#);

    assert_eq!(detail.code, 0);
    assert_eq!(detail.msg, r#"{"code":10305}"#);
}
