use super::*;

// Outside the browser (no `hydrate` feature) every storage helper must
// behave as an empty store so server rendering stays deterministic.

#[test]
fn load_token_is_none_outside_browser() {
    assert_eq!(load_token(), None);
}

#[test]
fn is_authenticated_false_outside_browser() {
    save_token("tok-123");
    assert!(!is_authenticated());
}

#[test]
fn cached_user_roundtrip_is_noop_outside_browser() {
    let user = UserInfo {
        id: 7,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_admin: false,
    };
    save_cached_user(&user);
    assert!(load_cached_user().is_none());
}
