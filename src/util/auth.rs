//! Route-guard decisions shared by routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: guarded pages
//! bounce unauthenticated visitors to `/login`, the login pages bounce
//! authenticated visitors to `/home`, and admin pages additionally require
//! the admin flag. Decisions are pure functions; the installers wrap them in
//! effects that re-run as the auth store settles.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where a navigation should be redirected, if anywhere.
///
/// `None` means the transition proceeds. While the auth store is still
/// loading the answer is always `None`; the installing effect re-evaluates
/// once loading settles.
pub fn route_redirect(requires_auth: bool, is_login_route: bool, state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if requires_auth && !state.is_authenticated() {
        return Some("/login");
    }
    if is_login_route && state.is_authenticated() {
        return Some("/home");
    }
    None
}

/// Redirect target for admin-only pages: `None` when the current user holds
/// the admin flag, the admin login page otherwise.
pub fn admin_redirect(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if !state.is_authenticated() || !state.is_admin() {
        return Some("/admin/login");
    }
    None
}

/// Install the three-branch route guard on the current page.
pub fn install_route_guard<F>(requires_auth: bool, is_login_route: bool, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = route_redirect(requires_auth, is_login_route, &auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Install the admin gate on the current page.
pub fn install_admin_guard<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = admin_redirect(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
