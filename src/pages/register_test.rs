use super::*;

// =============================================================
// Username
// =============================================================

#[test]
fn username_length_bounds() {
    assert!(validate_username("abc").is_err());
    assert!(validate_username("abcd").is_ok());
    assert!(validate_username(&"x".repeat(20)).is_ok());
    assert!(validate_username(&"x".repeat(21)).is_err());
}

#[test]
fn username_counts_characters_not_bytes() {
    // Four CJK characters are twelve bytes but a valid length.
    assert!(validate_username("论文工具").is_ok());
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_minimum_length() {
    assert!(validate_password("short12").is_err());
    assert!(validate_password("longenough").is_ok());
}

// =============================================================
// Email
// =============================================================

#[test]
fn empty_email_is_allowed() {
    assert!(validate_email("").is_ok());
}

#[test]
fn email_requires_at_and_dotted_domain() {
    assert!(validate_email("alice.example.com").is_err());
    assert!(validate_email("alice@").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("alice@nodot").is_err());
    assert!(validate_email("alice@.com").is_err());
    assert!(validate_email("alice@example.").is_err());
    assert!(validate_email("alice@example.com").is_ok());
}

// =============================================================
// Combined form check
// =============================================================

#[test]
fn mismatched_passwords_are_rejected() {
    assert_eq!(
        validate_registration("alice", "password1", "password2", ""),
        Err("Passwords do not match.")
    );
}

#[test]
fn full_form_passes() {
    assert!(validate_registration("alice", "password1", "password1", "alice@example.com").is_ok());
}
