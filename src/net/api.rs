//! HTTP client wrapper for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::Unavailable`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response is classified once, here. A 401 tears down the stored
//! session and sends the browser to `/login`; a 403 surfaces a
//! permission-denied toast; anything else non-2xx is handed back to the
//! caller as [`ApiError::Status`] with no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::net::types::{
    CountResponse, LogPage, LoginResponse, OperationPage, RefreshResponse, SimilarityReport,
    SpellcheckReport, SummaryResult, UsageStats, UserInfo, WeeklyResponse,
};
use crate::state::auth::AuthState;
use crate::state::notify::NotifyState;
#[cfg(feature = "hydrate")]
use crate::util::session;

/// Failure of an API call, classified by how the UI should react.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401: the stored token was rejected; the session has been cleared.
    #[error("not authenticated")]
    Unauthorized,
    /// 403: the account lacks permission; a toast has been shown.
    #[error("permission denied")]
    Forbidden,
    /// Any other non-2xx status, propagated to the caller.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR build).
    #[error("not available on server")]
    Unavailable,
}

/// HTTP verb for [`ApiClient::send`].
#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// `Authorization` header value for a stored token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Classify a non-2xx status code. Pure so the branching is testable.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, message: String) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        _ => ApiError::Status { status, message },
    }
}

fn user_endpoint(id: i64) -> String {
    format!("/api/user/{id}")
}

fn permissions_endpoint(id: i64) -> String {
    format!("/api/user/{id}/permissions")
}

fn operations_endpoint(user_id: i64, page: u32, per_page: u32) -> String {
    format!("/api/operations/user/{user_id}?page={page}&per_page={per_page}")
}

fn logs_endpoint(page: u32, per_page: u32, level: Option<&str>) -> String {
    match level {
        Some(level) => format!("/api/operations?page={page}&per_page={per_page}&level={level}"),
        None => format!("/api/operations?page={page}&per_page={per_page}"),
    }
}

/// Copyable handle over the API, carrying the store signals the response
/// branches write to. Provided once via context at the app root.
#[derive(Clone, Copy)]
pub struct ApiClient {
    pub auth: RwSignal<AuthState>,
    pub notify: RwSignal<NotifyState>,
}

impl ApiClient {
    pub fn new(auth: RwSignal<AuthState>, notify: RwSignal<NotifyState>) -> Self {
        Self { auth, notify }
    }

    // ---- user endpoints -------------------------------------------------

    /// `POST /api/user/login`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = serde_json::json!({ "username": username, "password": password });
        self.send(Verb::Post, "/api/user/login", Some(payload)).await
    }

    /// `POST /api/user/register`. The email is optional server-side.
    pub async fn register(&self, username: &str, password: &str, email: Option<&str>) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "username": username, "password": password, "email": email });
        self.send_unit(Verb::Post, "/api/user/register", Some(payload)).await
    }

    /// `POST /api/user/refresh`: exchange the stored token for a fresh one.
    pub async fn refresh(&self, token: &str) -> Result<RefreshResponse, ApiError> {
        let payload = serde_json::json!({ "token": token });
        self.send(Verb::Post, "/api/user/refresh", Some(payload)).await
    }

    /// `GET /api/user/info`: authoritative record for the current user.
    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.send(Verb::Get, "/api/user/info", None).await
    }

    /// `POST /api/user/logout`. Best-effort; local state is cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(Verb::Post, "/api/user/logout", None).await
    }

    /// `DELETE /api/user/{id}`.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(Verb::Delete, &user_endpoint(id), None).await
    }

    /// `GET /api/user/getall`: the admin user list.
    pub async fn all_users(&self) -> Result<Vec<UserInfo>, ApiError> {
        self.send(Verb::Get, "/api/user/getall", None).await
    }

    /// `PUT /api/user/{id}/permissions`: grant or revoke the admin flag.
    pub async fn set_permissions(&self, id: i64, is_admin: bool) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "is_admin": is_admin });
        self.send_unit(Verb::Put, &permissions_endpoint(id), Some(payload)).await
    }

    // ---- paper tool endpoints -------------------------------------------

    /// `POST /api/papers/similarity`: similarity check against the corpus,
    /// or against `reference` when one is supplied.
    pub async fn check_similarity(&self, text: &str, reference: Option<&str>) -> Result<SimilarityReport, ApiError> {
        let payload = serde_json::json!({ "text": text, "reference": reference });
        self.send(Verb::Post, "/api/papers/similarity", Some(payload)).await
    }

    /// `POST /api/papers/spellcheck`.
    pub async fn check_spelling(&self, text: &str) -> Result<SpellcheckReport, ApiError> {
        let payload = serde_json::json!({ "text": text });
        self.send(Verb::Post, "/api/papers/spellcheck", Some(payload)).await
    }

    /// `POST /api/papers/summary`.
    pub async fn summarize(&self, text: &str, max_len: u32) -> Result<SummaryResult, ApiError> {
        let payload = serde_json::json!({ "text": text, "max_len": max_len });
        self.send(Verb::Post, "/api/papers/summary", Some(payload)).await
    }

    // ---- history / admin endpoints --------------------------------------

    /// `GET /api/operations/user/{id}`: paginated operation history.
    pub async fn user_operations(&self, user_id: i64, page: u32, per_page: u32) -> Result<OperationPage, ApiError> {
        self.send(Verb::Get, &operations_endpoint(user_id, page, per_page), None).await
    }

    /// `GET /api/operations`: paginated admin logs, optionally filtered by level.
    pub async fn logs(&self, page: u32, per_page: u32, level: Option<&str>) -> Result<LogPage, ApiError> {
        self.send(Verb::Get, &logs_endpoint(page, per_page, level), None).await
    }

    /// Assemble the statistics view from the count/weekly endpoints.
    pub async fn usage_stats(&self) -> Result<UsageStats, ApiError> {
        let users: CountResponse = self.send(Verb::Get, "/api/user/total_count", None).await?;
        let papers: CountResponse = self.send(Verb::Get, "/api/papers/total_count", None).await?;
        let weekly: WeeklyResponse = self.send(Verb::Get, "/api/user/weekly", None).await?;
        Ok(UsageStats {
            user_total: users.count,
            paper_total: papers.count,
            weekly: weekly.weekly,
        })
    }

    // ---- request path ----------------------------------------------------

    /// Issue a request and decode the JSON body.
    async fn send<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.execute(verb, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Issue a request where the body, if any, is ignored.
    async fn send_unit(&self, verb: Verb, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.execute(verb, path, body).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Send the request with the bearer header attached and run the
    /// status-code branches. Returns the response only when it is 2xx.
    #[cfg(feature = "hydrate")]
    async fn execute(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match verb {
            Verb::Get => Request::get(path),
            Verb::Post => Request::post(path),
            Verb::Put => Request::put(path),
            Verb::Delete => Request::delete(path),
        };
        if let Some(token) = session::load_token() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }

        let sent = match body {
            Some(json) => {
                builder
                    .json(&json)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        if resp.ok() {
            return Ok(resp);
        }

        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        log::warn!("api error: {verb:?} {path} -> {status}");

        let err = status_error(status, message);
        match &err {
            ApiError::Unauthorized => self.expire_session(),
            ApiError::Forbidden => self.notify.update(|n| n.error("Permission denied.")),
            _ => {}
        }
        Err(err)
    }

    /// 401 path: drop the stored token and cached user, reset the auth store,
    /// and send the browser back to the login page.
    #[cfg(feature = "hydrate")]
    fn expire_session(&self) {
        self.auth.update(AuthState::clear);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
