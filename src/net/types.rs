//! Wire DTOs for the backend HTTP API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies field for field so serde can
//! decode responses directly; anything the server may omit is `Option` or
//! carries a serde default.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by `/api/user/info` and the admin user list.
///
/// Cached in `localStorage` for display between reloads; the server remains
/// the source of truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Server-issued numeric identifier.
    pub id: i64,
    /// Display / login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Whether the account may use the admin console. Absent means false.
    #[serde(default)]
    pub is_admin: bool,
}

/// Body of a successful `POST /api/user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token; no structure is assumed client-side.
    pub token: String,
    pub user: UserInfo,
}

/// Body of a successful `POST /api/user/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
}

/// One matched region from a similarity check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarSegment {
    /// Excerpt from the submitted text.
    pub source: String,
    /// Excerpt it was matched against.
    pub matched: String,
    /// Pairwise similarity in `0.0..=1.0`.
    pub similarity: f64,
}

/// Result of `POST /api/papers/similarity`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Overall similarity in `0.0..=1.0`.
    pub score: f64,
    #[serde(default)]
    pub segments: Vec<SimilarSegment>,
}

/// A single suspected typo with its replacement suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoFinding {
    /// Character offset into the submitted text.
    pub position: usize,
    /// The flagged token as it appeared.
    pub token: String,
    /// Suggested replacement.
    pub suggestion: String,
    /// Short surrounding excerpt for display.
    pub context: String,
}

/// Result of `POST /api/papers/spellcheck`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcheckReport {
    #[serde(default)]
    pub typos: Vec<TypoFinding>,
    /// The submitted text with suggestions applied.
    pub checked_text: String,
}

/// Result of `POST /api/papers/summary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One entry in a user's operation history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: i64,
    pub user_id: i64,
    /// Operation kind, e.g. `"similarity"`, `"spellcheck"`, `"summary"`.
    pub kind: String,
    /// Human-readable description recorded by the server.
    pub detail: String,
    /// Server-formatted timestamp string.
    pub created_at: String,
}

/// Paginated operation history for one user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OperationPage {
    #[serde(default)]
    pub operations: Vec<OperationRecord>,
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
}

/// One entry in the admin log view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub action: String,
    /// Severity label, e.g. `"info"`, `"warning"`, `"error"`.
    pub level: String,
    pub created_at: String,
}

/// Paginated admin logs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
}

/// Body of the `total_count` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

/// One bucket of the weekly activity series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCount {
    /// Bucket label as formatted by the server (e.g. an ISO week or day).
    pub label: String,
    pub count: i64,
}

/// Body of `GET /api/user/weekly`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WeeklyResponse {
    #[serde(default)]
    pub weekly: Vec<WeeklyCount>,
}

/// Statistics assembled client-side from the count/weekly endpoints for the
/// admin statistics view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageStats {
    pub user_total: i64,
    pub paper_total: i64,
    pub weekly: Vec<WeeklyCount>,
}
