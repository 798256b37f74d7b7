//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the token/user storage helpers for reactive binding: route guards
//! and user-aware components read this store, and every mutation writes
//! through to `localStorage` so a reload restores the same session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserInfo;
use crate::util::session;

/// Authentication state tracking the stored token, the displayed user, and
/// whether the startup revalidation is still in flight.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl AuthState {
    /// Seed the store from `localStorage`. `loading` stays true until the
    /// startup refresh/info round-trip settles.
    pub fn from_storage() -> Self {
        Self {
            token: session::load_token(),
            user: session::load_cached_user(),
            loading: true,
        }
    }

    /// Record a successful login: persist then mirror.
    pub fn establish(&mut self, token: String, user: UserInfo) {
        session::save_token(&token);
        session::save_cached_user(&user);
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Replace the token after a refresh without touching the user.
    pub fn rotate_token(&mut self, token: String) {
        session::save_token(&token);
        self.token = Some(token);
    }

    /// Update the displayed user from an authoritative `/api/user/info` body.
    pub fn set_user(&mut self, user: UserInfo) {
        session::save_cached_user(&user);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session everywhere: storage and store.
    pub fn clear(&mut self) {
        session::clear_token();
        session::clear_cached_user();
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Token present means requests go out authenticated. Advisory only.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the displayed user holds the admin flag.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}
