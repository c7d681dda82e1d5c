use super::*;

#[test]
fn request_failed_message_carries_method_path_status_and_body() {
    let err = ClientError::RequestFailed {
        method: Method::Delete,
        path: "/boards/b1".to_owned(),
        status: 500,
        body: "boom".to_owned(),
    };
    assert_eq!(err.to_string(), "DELETE /boards/b1 failed: 500 boom");
}

#[test]
fn alert_text_prefixes_remote_failures_with_context() {
    let err = ClientError::Transport("offline".to_owned());
    assert_eq!(err.alert_text("Failed to load boards"), "Failed to load boards: network error: offline");
}

#[test]
fn alert_text_for_auth_expired_asks_to_login() {
    assert_eq!(ClientError::AuthExpired.alert_text("ignored"), "Session expired. Please login again.");
    assert!(ClientError::AuthExpired.is_auth_expired());
}

#[test]
fn alert_text_for_validation_is_the_bare_message() {
    let err = ClientError::Validation("Please enter a board name");
    assert_eq!(err.alert_text("Failed to create board"), "Please enter a board name");
    assert!(!err.is_auth_expired());
}

#[test]
fn registration_failure_surfaces_backend_text() {
    let err = ClientError::RegistrationFailed("Email already exists".to_owned());
    assert_eq!(err.alert_text("Registration failed"), "Email already exists");
}

#[test]
fn serde_errors_become_decode_errors() {
    let err: ClientError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
    assert!(matches!(err, ClientError::Decode(_)));
}
