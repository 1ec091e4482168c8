use crate::RedactedAuthToken;

/// **VALUE**: Verifies that Debug and Display never expose the token value.
///
/// **WHY THIS MATTERS**: Tokens are attached to log-adjacent structures
/// (errors, request builders). One `{:?}` on the wrong struct must not leak
/// a live credential.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    let token = RedactedAuthToken::new("super-secret-auth".to_string());

    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    assert!(!debug.contains("super-secret-auth"));
    assert!(!display.contains("super-secret-auth"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_token_when_as_str_then_returns_inner_value() {
    let token = RedactedAuthToken::from("abc123");

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
}

#[test]
fn given_token_when_compared_with_str_then_matches_inner_value() {
    let token = RedactedAuthToken::from("abc123");

    assert_eq!(token, "abc123");
}
