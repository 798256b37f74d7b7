use super::*;
use crate::net::types::UserInfo;

fn user(is_admin: bool) -> UserInfo {
    UserInfo {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_admin,
    }
}

fn authed(is_admin: bool) -> AuthState {
    AuthState {
        token: Some("tok-1".to_owned()),
        user: Some(user(is_admin)),
        loading: false,
    }
}

fn anonymous() -> AuthState {
    AuthState { token: None, user: None, loading: false }
}

// =============================================================
// route_redirect
// =============================================================

#[test]
fn guarded_route_redirects_to_login_without_token() {
    assert_eq!(route_redirect(true, false, &anonymous()), Some("/login"));
}

#[test]
fn guarded_route_allows_token_holder() {
    assert_eq!(route_redirect(true, false, &authed(false)), None);
}

#[test]
fn login_route_redirects_home_when_token_present() {
    assert_eq!(route_redirect(false, true, &authed(false)), Some("/home"));
}

#[test]
fn login_route_allows_anonymous_visitor() {
    assert_eq!(route_redirect(false, true, &anonymous()), None);
}

#[test]
fn public_route_always_proceeds() {
    assert_eq!(route_redirect(false, false, &anonymous()), None);
    assert_eq!(route_redirect(false, false, &authed(true)), None);
}

#[test]
fn no_redirect_while_auth_still_loading() {
    let state = AuthState { token: None, user: None, loading: true };
    assert_eq!(route_redirect(true, false, &state), None);
    assert_eq!(route_redirect(false, true, &state), None);
}

// =============================================================
// admin_redirect
// =============================================================

#[test]
fn admin_page_allows_admin_user() {
    assert_eq!(admin_redirect(&authed(true)), None);
}

#[test]
fn admin_page_rejects_regular_user() {
    assert_eq!(admin_redirect(&authed(false)), Some("/admin/login"));
}

#[test]
fn admin_page_rejects_anonymous_visitor() {
    assert_eq!(admin_redirect(&anonymous()), Some("/admin/login"));
}

#[test]
fn admin_page_waits_for_loading_auth() {
    let state = AuthState { token: Some("tok-1".to_owned()), user: None, loading: true };
    assert_eq!(admin_redirect(&state), None);
}
