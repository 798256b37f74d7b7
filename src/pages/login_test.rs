use super::*;

#[test]
fn rejects_empty_username() {
    assert!(validate_credentials("", "secret123").is_err());
    assert!(validate_credentials("   ", "secret123").is_err());
}

#[test]
fn rejects_empty_password() {
    assert!(validate_credentials("alice", "").is_err());
}

#[test]
fn accepts_filled_credentials() {
    assert!(validate_credentials("alice", "secret123").is_ok());
}
