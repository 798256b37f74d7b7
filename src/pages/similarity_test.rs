use super::*;

#[test]
fn score_formats_as_percentage() {
    assert_eq!(score_percent(0.375), "37.5%");
    assert_eq!(score_percent(1.0), "100.0%");
    assert_eq!(score_percent(0.0), "0.0%");
}

#[test]
fn out_of_range_scores_are_clamped() {
    assert_eq!(score_percent(1.7), "100.0%");
    assert_eq!(score_percent(-0.2), "0.0%");
}
