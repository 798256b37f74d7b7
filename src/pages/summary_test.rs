use super::*;

#[test]
fn parse_uses_default_for_garbage_input() {
    assert_eq!(parse_max_len(""), DEFAULT_MAX_LEN);
    assert_eq!(parse_max_len("abc"), DEFAULT_MAX_LEN);
    assert_eq!(parse_max_len("-5"), DEFAULT_MAX_LEN);
}

#[test]
fn parse_accepts_plain_numbers() {
    assert_eq!(parse_max_len("300"), 300);
    assert_eq!(parse_max_len(" 120 "), 120);
}

#[test]
fn parse_clamps_to_backend_range() {
    assert_eq!(parse_max_len("10"), 50);
    assert_eq!(parse_max_len("999999"), 2000);
}
