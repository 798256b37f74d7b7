use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> UserInfo {
    UserInfo {
        id: 42,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_admin: false,
    }
}

// =============================================================
// UserInfo serde
// =============================================================

#[test]
fn user_info_is_admin_defaults_false_when_absent() {
    let user: UserInfo =
        serde_json::from_str(r#"{"id": 42, "username": "alice", "email": "alice@example.com"}"#).unwrap();
    assert_eq!(user, make_user());
}

#[test]
fn user_info_roundtrips_admin_flag() {
    let mut user = make_user();
    user.is_admin = true;
    let raw = serde_json::to_string(&user).unwrap();
    let back: UserInfo = serde_json::from_str(&raw).unwrap();
    assert!(back.is_admin);
}

// =============================================================
// Login / refresh bodies
// =============================================================

#[test]
fn login_response_decodes_token_and_user() {
    let raw = r#"{"token": "tok-abc", "user": {"id": 42, "username": "alice", "email": "alice@example.com"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "tok-abc");
    assert_eq!(resp.user, make_user());
}

#[test]
fn refresh_response_decodes_token() {
    let resp: RefreshResponse = serde_json::from_str(r#"{"token": "tok-next"}"#).unwrap();
    assert_eq!(resp.token, "tok-next");
}

// =============================================================
// Paper tool reports
// =============================================================

#[test]
fn similarity_report_decodes_segments() {
    let raw = r#"{
        "score": 0.37,
        "segments": [
            {"source": "the quick fox", "matched": "a quick fox", "similarity": 0.9}
        ]
    }"#;
    let report: SimilarityReport = serde_json::from_str(raw).unwrap();
    assert!((report.score - 0.37).abs() < 1e-9);
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].matched, "a quick fox");
}

#[test]
fn similarity_report_segments_default_empty() {
    let report: SimilarityReport = serde_json::from_str(r#"{"score": 0.0}"#).unwrap();
    assert!(report.segments.is_empty());
}

#[test]
fn spellcheck_report_decodes_findings() {
    let raw = r#"{
        "typos": [
            {"position": 12, "token": "teh", "suggestion": "the", "context": "over teh lazy dog"}
        ],
        "checked_text": "over the lazy dog"
    }"#;
    let report: SpellcheckReport = serde_json::from_str(raw).unwrap();
    assert_eq!(report.typos[0].position, 12);
    assert_eq!(report.typos[0].suggestion, "the");
    assert_eq!(report.checked_text, "over the lazy dog");
}

#[test]
fn summary_result_keywords_default_empty() {
    let result: SummaryResult = serde_json::from_str(r#"{"summary": "short"}"#).unwrap();
    assert_eq!(result.summary, "short");
    assert!(result.keywords.is_empty());
}

// =============================================================
// Pagination bodies
// =============================================================

#[test]
fn operation_page_decodes_records_and_counters() {
    let raw = r#"{
        "operations": [
            {"id": 1, "user_id": 42, "kind": "summary", "detail": "summarized 2 pages", "created_at": "2024-05-01 10:00:00"}
        ],
        "total": 21,
        "pages": 2,
        "current_page": 1
    }"#;
    let page: OperationPage = serde_json::from_str(raw).unwrap();
    assert_eq!(page.operations.len(), 1);
    assert_eq!(page.operations[0].kind, "summary");
    assert_eq!((page.total, page.pages, page.current_page), (21, 2, 1));
}

#[test]
fn log_page_decodes_entries() {
    let raw = r#"{
        "logs": [
            {"id": 9, "user_id": 42, "username": "alice", "action": "login", "level": "info", "created_at": "2024-05-01 10:00:00"}
        ],
        "total": 1,
        "pages": 1,
        "current_page": 1
    }"#;
    let page: LogPage = serde_json::from_str(raw).unwrap();
    assert_eq!(page.logs[0].level, "info");
    assert_eq!(page.total, 1);
}

// =============================================================
// Statistics bodies
// =============================================================

#[test]
fn count_and_weekly_bodies_decode() {
    let count: CountResponse = serde_json::from_str(r#"{"count": 128}"#).unwrap();
    assert_eq!(count.count, 128);

    let weekly: WeeklyResponse =
        serde_json::from_str(r#"{"weekly": [{"label": "2024-W18", "count": 5}]}"#).unwrap();
    assert_eq!(weekly.weekly[0].label, "2024-W18");
    assert_eq!(weekly.weekly[0].count, 5);
}
