//! Bearer-token and cached-user storage over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is an opaque string issued by the server; presence of a token is
//! what route guards and the HTTP layer treat as "authenticated". Nothing is
//! verified client-side. All access is hydrate-only and no-ops on the server
//! so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserInfo;
use crate::util::persistence;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "papertools_token";
/// Cached user record for display; the server stays the source of truth.
const USER_KEY: &str = "papertools_user";

/// Read the stored session token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored session token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Whether a token is stored. Advisory only: token present means requests
/// will be sent as authenticated, not that the token is still accepted.
pub fn is_authenticated() -> bool {
    load_token().is_some()
}

/// Read the cached user record, if any.
pub fn load_cached_user() -> Option<UserInfo> {
    persistence::load_json(USER_KEY)
}

/// Cache the user record for display across reloads.
pub fn save_cached_user(user: &UserInfo) {
    persistence::save_json(USER_KEY, user);
}

/// Drop the cached user record.
pub fn clear_cached_user() {
    persistence::remove(USER_KEY);
}
