use crate::HttpStatusCode;

#[test]
fn given_4xx_code_when_categorized_then_is_client_error() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(!HttpStatusCode(200).is_client_error());
}

#[test]
fn given_5xx_code_when_categorized_then_is_server_error() {
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(401).is_server_error());
}

#[test]
fn given_auth_codes_when_categorized_then_is_auth_rejection() {
    assert!(HttpStatusCode(401).is_auth_rejection());
    assert!(HttpStatusCode(403).is_auth_rejection());
    assert!(!HttpStatusCode(400).is_auth_rejection());
    assert!(!HttpStatusCode(500).is_auth_rejection());
}
