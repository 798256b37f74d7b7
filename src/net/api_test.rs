use super::*;

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok-abc"), "Bearer tok-abc");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_401_classifies_unauthorized() {
    assert_eq!(status_error(401, String::new()), ApiError::Unauthorized);
}

#[test]
fn status_403_classifies_forbidden() {
    assert_eq!(status_error(403, String::new()), ApiError::Forbidden);
}

#[test]
fn other_statuses_propagate_with_message() {
    assert_eq!(
        status_error(500, "boom".to_owned()),
        ApiError::Status { status: 500, message: "boom".to_owned() }
    );
    assert_eq!(
        status_error(404, String::new()),
        ApiError::Status { status: 404, message: String::new() }
    );
}

#[test]
fn api_error_displays_status_detail() {
    let err = status_error(500, "boom".to_owned());
    assert_eq!(err.to_string(), "request failed with status 500: boom");
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(42), "/api/user/42");
}

#[test]
fn permissions_endpoint_formats_expected_path() {
    assert_eq!(permissions_endpoint(7), "/api/user/7/permissions");
}

#[test]
fn operations_endpoint_includes_paging() {
    assert_eq!(operations_endpoint(42, 2, 20), "/api/operations/user/42?page=2&per_page=20");
}

#[test]
fn logs_endpoint_omits_absent_level_filter() {
    assert_eq!(logs_endpoint(1, 50, None), "/api/operations?page=1&per_page=50");
}

#[test]
fn logs_endpoint_appends_level_filter() {
    assert_eq!(
        logs_endpoint(3, 50, Some("error")),
        "/api/operations?page=3&per_page=50&level=error"
    );
}
