use super::*;

fn make_user(is_admin: bool) -> UserInfo {
    UserInfo {
        id: 42,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_admin,
    }
}

#[test]
fn default_state_is_anonymous_and_settled() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn from_storage_marks_loading() {
    // Native builds see an empty store; the flag still signals the pending
    // startup revalidation.
    let state = AuthState::from_storage();
    assert!(state.loading);
}

#[test]
fn establish_sets_token_user_and_settles() {
    let mut state = AuthState { loading: true, ..AuthState::default() };
    state.establish("tok-1".to_owned(), make_user(false));
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(42));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn rotate_token_keeps_user() {
    let mut state = AuthState::default();
    state.establish("tok-1".to_owned(), make_user(false));
    state.rotate_token("tok-2".to_owned());
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(42));
}

#[test]
fn clear_resets_everything() {
    let mut state = AuthState::default();
    state.establish("tok-1".to_owned(), make_user(true));
    state.clear();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn is_admin_follows_user_flag() {
    let mut state = AuthState::default();
    state.establish("tok-1".to_owned(), make_user(true));
    assert!(state.is_admin());
    state.set_user(make_user(false));
    assert!(!state.is_admin());
}

#[test]
fn token_without_user_still_counts_as_authenticated() {
    let state = AuthState { token: Some("tok-1".to_owned()), user: None, loading: false };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}
